use cached::{Cached, TimedSizedCache};
use dto::member_expiry_data::MemberExpiryData;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

const CACHE_SIZE: usize = 16;

/// Last member expiry lists fetched from the club service, by company id.
/// Entries expire after the configured lifespan.
pub struct MemberCache {
    members: TimedSizedCache<i32, Vec<MemberExpiryData>>,
}

impl MemberCache {
    pub fn new(lifespan: Duration) -> Self {
        let members = TimedSizedCache::with_size_and_lifespan(CACHE_SIZE, lifespan.as_secs());
        Self { members }
    }

    pub fn get(&mut self, company_id: i32) -> Option<Vec<MemberExpiryData>> {
        self.members.cache_get(&company_id).cloned()
    }

    pub fn store(&mut self, company_id: i32, members: Vec<MemberExpiryData>) {
        self.members.cache_set(company_id, members);
    }

    pub fn invalidate(&mut self, company_id: i32) {
        self.members.cache_remove(&company_id);
    }

    pub fn clear(&mut self) {
        self.members.cache_clear();
    }
}

impl Debug for MemberCache {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberCache")
            .field("size", &self.members.cache_size())
            .finish()
    }
}
