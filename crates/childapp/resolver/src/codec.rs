//! Combined identifier codec
//!
//! `decode` is the only place that knows the identifier layout. Everything
//! downstream works on [`DecodedId`].

use childapp_types::{DecodedId, Provenance, ResolveError, ResolveResult, SEPARATOR};

/// Split a combined identifier into provenance and lookup key.
///
/// - no separator: personal, key is the input
/// - `personal-<id>`: personal, key is `<id>`
/// - `community-…` / `commercial-…`: key is the whole input, since registry
///   ids carry their own prefix
///
/// Empty segments and unknown tags are rejected.
pub fn decode(id: &str) -> ResolveResult<DecodedId> {
    if id.split(SEPARATOR).any(str::is_empty) {
        return Err(ResolveError::InvalidIdentifier(id.to_string()));
    }

    let Some((tag, rest)) = id.split_once(SEPARATOR) else {
        return Ok(DecodedId::new(Provenance::Personal, id));
    };

    let provenance: Provenance = tag
        .parse()
        .map_err(|_| ResolveError::InvalidIdentifier(id.to_string()))?;

    let bare_id = match provenance {
        Provenance::Personal => rest,
        Provenance::Community | Provenance::Commercial => id,
    };

    Ok(DecodedId::new(provenance, bare_id))
}
