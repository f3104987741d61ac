#[cfg(test)]
mod tests {
    use flangup::libs::error::UpdateError;
    use flangup::libs::http::{next_hop, Hop, MAX_REDIRECTS};

    /// Walks a scripted chain of responses the way the transport does:
    /// start with the full hop budget, decrement on every redirect.
    fn walk(responses: &[(u16, Option<&str>)]) -> Result<(), UpdateError> {
        let mut url = "https://example.com/start".to_string();
        let mut hops_left = MAX_REDIRECTS;

        for (status, location) in responses {
            match next_hop(*status, *location, &url, hops_left)? {
                Hop::Follow(next) => {
                    hops_left -= 1;
                    url = next;
                }
                Hop::Terminal => return Ok(()),
            }
        }
        panic!("chain ended without a terminal response");
    }

    fn redirects(count: usize) -> Vec<(u16, Option<&'static str>)> {
        (0..count).map(|_| (302, Some("https://example.com/next"))).collect()
    }

    #[test]
    fn test_chain_at_the_bound_succeeds() {
        let mut chain = redirects(MAX_REDIRECTS);
        chain.push((200, None));
        assert!(walk(&chain).is_ok());
    }

    #[test]
    fn test_chain_beyond_the_bound_fails() {
        let mut chain = redirects(MAX_REDIRECTS + 1);
        chain.push((200, None));
        let err = walk(&chain).unwrap_err();
        assert!(matches!(err, UpdateError::TooManyRedirects { limit, .. } if limit == MAX_REDIRECTS));
    }

    #[test]
    fn test_redirect_without_location_fails() {
        let err = walk(&[(301, None)]).unwrap_err();
        assert!(matches!(err, UpdateError::MissingLocation { .. }));
    }

    #[test]
    fn test_follow_carries_the_location_target() {
        let hop = next_hop(302, Some("https://cdn.example.com/asset"), "https://example.com/a", MAX_REDIRECTS)
            .unwrap();
        assert_eq!(hop, Hop::Follow("https://cdn.example.com/asset".to_string()));
    }

    #[test]
    fn test_success_statuses_are_terminal() {
        assert_eq!(next_hop(200, None, "https://example.com/a", MAX_REDIRECTS).unwrap(), Hop::Terminal);
        assert_eq!(next_hop(204, None, "https://example.com/a", MAX_REDIRECTS).unwrap(), Hop::Terminal);
    }

    #[test]
    fn test_error_statuses_are_reported() {
        let err = next_hop(404, None, "https://example.com/a", MAX_REDIRECTS).unwrap_err();
        assert!(matches!(err, UpdateError::Status { status: 404, .. }));

        let err = next_hop(500, None, "https://example.com/a", MAX_REDIRECTS).unwrap_err();
        assert!(matches!(err, UpdateError::Status { status: 500, .. }));
    }
}
