/// Generate a peer identity: `peer_<ulid>`.
///
/// Generated once at process startup and immutable for the peer's lifetime.
/// ULIDs are collision-free across concurrently starting peers with
/// overwhelming probability.
pub fn new_peer_id() -> String {
    format!("peer_{}", ulid::Ulid::new().to_string().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peer_id_has_prefix() {
        let id = new_peer_id();
        assert!(id.starts_with("peer_"));
        assert_eq!(id.len(), "peer_".len() + 26);
    }

    #[test]
    fn peer_ids_are_unique() {
        let a = new_peer_id();
        let b = new_peer_id();
        assert_ne!(a, b);
    }
}
