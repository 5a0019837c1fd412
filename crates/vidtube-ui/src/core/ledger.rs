//! Request tickets used to discard stale responses.
//!
//! Every keyed fetch takes a ticket; a response is applied only if its ticket
//! is still the newest for that resource. Unkeyed tickets (mutations) are
//! always current.

use std::collections::HashMap;

/// Identity of a fetched resource: the request path plus its query.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Key for `path` with the given query pairs.
    #[must_use]
    pub fn new(path: &str, query: &[(&str, String)]) -> Self {
        let mut key = path.trim_matches('/').to_string();
        if !query.is_empty() {
            key.push('?');
            let joined: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
            key.push_str(&joined.join("&"));
        }
        Self(key)
    }

    /// Key scoped to a path only.
    #[must_use]
    pub fn path(path: &str) -> Self {
        Self::new(path, &[])
    }

    /// Key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Handle identifying one in-flight request.
///
/// The default ticket is unkeyed and therefore always current.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ticket {
    key: Option<ResourceKey>,
    seq: u64,
}

impl Ticket {
    /// Sequence number assigned at dispatch.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }
}

/// Latest issued ticket per resource.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestLedger {
    next: u64,
    latest: HashMap<ResourceKey, u64>,
}

impl RequestLedger {
    /// Issue a ticket, superseding earlier tickets for the same key.
    pub fn begin(&mut self, key: Option<ResourceKey>) -> Ticket {
        self.next += 1;
        if let Some(key) = key.as_ref() {
            self.latest.insert(key.clone(), self.next);
        }
        Ticket {
            key,
            seq: self.next,
        }
    }

    /// Whether a response for `ticket` may still be applied.
    #[must_use]
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket
            .key
            .as_ref()
            .is_none_or(|key| self.latest.get(key) == Some(&ticket.seq))
    }

    /// Retire `ticket` once its response has been applied.
    ///
    /// Only the newest ticket for a key releases the entry, so an in-flight
    /// successor keeps its place.
    pub fn finish(&mut self, ticket: &Ticket) {
        if let Some(key) = ticket.key.as_ref()
            && self.latest.get(key) == Some(&ticket.seq)
        {
            self.latest.remove(key);
        }
    }

    /// Number of resources with a request still in flight.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.latest.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older_for_same_key() {
        let mut ledger = RequestLedger::default();
        let key = ResourceKey::path("/videos/v1");
        let first = ledger.begin(Some(key.clone()));
        let second = ledger.begin(Some(key));
        assert!(!ledger.is_current(&first));
        assert!(ledger.is_current(&second));
    }

    #[test]
    fn distinct_keys_and_unkeyed_tickets_stay_current() {
        let mut ledger = RequestLedger::default();
        let a = ledger.begin(Some(ResourceKey::path("/videos/a")));
        let b = ledger.begin(Some(ResourceKey::path("/videos/b")));
        let mutation = ledger.begin(None);
        let _later = ledger.begin(None);
        assert!(ledger.is_current(&a));
        assert!(ledger.is_current(&b));
        assert!(ledger.is_current(&mutation));
        assert!(b.seq() > a.seq());
    }

    #[test]
    fn finished_tickets_release_their_keys() {
        let mut ledger = RequestLedger::default();
        for i in 0..1000 {
            let ticket = ledger.begin(Some(ResourceKey::path(&format!("/videos/v{i}"))));
            ledger.finish(&ticket);
        }
        assert_eq!(ledger.in_flight(), 0);
    }

    #[test]
    fn superseded_ticket_does_not_release_newer_one() {
        let mut ledger = RequestLedger::default();
        let key = ResourceKey::path("/videos/v1");
        let older = ledger.begin(Some(key.clone()));
        let newer = ledger.begin(Some(key));
        ledger.finish(&older);
        assert!(ledger.is_current(&newer));
        ledger.finish(&newer);
        assert!(!ledger.is_current(&older));
        assert_eq!(ledger.in_flight(), 0);
    }

    #[test]
    fn query_is_part_of_the_key() {
        let page1 = ResourceKey::new("/comment/v1", &[("page", "1".into())]);
        let page2 = ResourceKey::new("comment/v1/", &[("page", "2".into())]);
        assert_ne!(page1, page2);
        assert_eq!(page1.as_str(), "comment/v1?page=1");
    }
}
