//! Shared HTTP transport with explicit, bounded redirect following.
//!
//! Both the release feed client and the artifact fetcher go through this
//! module. The underlying `reqwest` client is built with redirects disabled
//! and the chain is walked by hand, so the hop bound is a real, testable
//! number rather than a library default. The pure [`next_hop`] decision
//! function carries the whole policy and is exercised in tests without any
//! network.

use crate::libs::error::UpdateError;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::Client;

/// Maximum number of redirect hops followed before giving up.
///
/// A chain of exactly this many redirects followed by a terminal response
/// succeeds; one more redirect fails with `TooManyRedirects`.
pub const MAX_REDIRECTS: usize = 5;

/// Outcome of inspecting one response in a redirect chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hop {
    /// 3xx with a Location header: issue the next request there.
    Follow(String),
    /// 2xx: this response is the payload.
    Terminal,
}

/// Decides what to do with a single response given the remaining hop budget.
pub fn next_hop(status: u16, location: Option<&str>, url: &str, hops_left: usize) -> Result<Hop, UpdateError> {
    if (300..400).contains(&status) {
        if hops_left == 0 {
            return Err(UpdateError::TooManyRedirects {
                url: url.to_owned(),
                limit: MAX_REDIRECTS,
            });
        }
        return match location {
            Some(next) => Ok(Hop::Follow(next.to_owned())),
            None => Err(UpdateError::MissingLocation { url: url.to_owned() }),
        };
    }
    if (200..300).contains(&status) {
        return Ok(Hop::Terminal);
    }
    Err(UpdateError::Status {
        url: url.to_owned(),
        status,
    })
}

/// Thin wrapper over a redirect-disabled `reqwest` client.
#[derive(Clone, Debug)]
pub struct Http {
    client: Client,
}

impl Http {
    pub fn new(user_agent: &str) -> Result<Self, UpdateError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .user_agent(user_agent.to_owned())
            .build()
            .map_err(|e| UpdateError::ClientInit { message: e.to_string() })?;
        Ok(Self { client })
    }

    /// Issues a GET, following up to [`MAX_REDIRECTS`] redirect hops, and
    /// returns the terminal 2xx response.
    pub async fn get_following(&self, url: &str) -> Result<reqwest::Response, UpdateError> {
        let mut current = url.to_owned();
        let mut hops_left = MAX_REDIRECTS;

        loop {
            let response = self
                .client
                .get(&current)
                .send()
                .await
                .map_err(|e| UpdateError::transport(&current, e))?;

            let status = response.status().as_u16();
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);

            match next_hop(status, location.as_deref(), &current, hops_left)? {
                Hop::Follow(next) => {
                    tracing::debug!(from = %current, to = %next, hops_left, "following redirect");
                    hops_left -= 1;
                    current = next;
                }
                Hop::Terminal => return Ok(response),
            }
        }
    }
}
