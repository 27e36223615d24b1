use super::CmdResult;
use crate::store::backend::StorageBackend;
use crate::store::ClinicStore;

/// The configuration the store was opened with.
pub fn show<B: StorageBackend>(store: &ClinicStore<B>) -> CmdResult {
    CmdResult::default().with_config(store.config().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClinicConfig;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn shows_effective_config() {
        let store = InMemoryStore::with_config(ClinicConfig::uniform(7));
        let config = show(&store).config.unwrap();
        assert_eq!(config.doctor_capacity, 7);
        assert_eq!(config.bill_capacity, 7);
    }
}
