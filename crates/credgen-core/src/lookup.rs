use crate::errors::{ConsoleError, ConsoleResult};
use crate::models::CredentialRequest;

/// Resolves `id` against a freshly fetched collection.
///
/// The service has no get-by-id endpoint for this path, so this is a linear
/// scan: O(n) in the size of the listing, paid on every status check. Nothing
/// is cached between calls, so the answer is never staler than the listing
/// it was given. Matching is exact and the first match wins.
pub fn find_by_id<'a>(
    collection: &'a [CredentialRequest],
    id: &str,
) -> ConsoleResult<&'a CredentialRequest> {
    collection
        .iter()
        .find(|credential| credential.id == id)
        .ok_or_else(|| ConsoleError::identifier_unknown(id))
}
