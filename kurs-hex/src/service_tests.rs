//! RateService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use kurs_adapters::MemoryStore;
    use kurs_types::{
        AppError, CacheError, ConversionKind, ConvertRequest, CurrencyCode, KeyValueStore,
        ProviderError, RateProvider, RateTable, domain::rate::RateEntry,
    };

    use crate::RateService;

    const USD: CurrencyCode = CurrencyCode(840);
    const EUR: CurrencyCode = CurrencyCode(978);
    const UAH: CurrencyCode = CurrencyCode(980);

    /// Provider stub that counts fetches.
    struct MockProvider {
        table: Option<RateTable>,
        fetches: AtomicUsize,
    }

    impl MockProvider {
        fn with_table(table: RateTable) -> Self {
            Self {
                table: Some(table),
                fetches: AtomicUsize::new(0),
            }
        }

        /// A provider whose response carries zero entries.
        fn empty() -> Self {
            Self {
                table: None,
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateProvider for &MockProvider {
        async fn fetch(&self) -> Result<RateTable, ProviderError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.table.clone().ok_or(ProviderError::Empty)
        }
    }

    /// Store whose read path is down while writes still succeed.
    struct ReadOutageStore {
        inner: MemoryStore,
    }

    #[async_trait]
    impl KeyValueStore for ReadOutageStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::Store("connection refused".into()))
        }

        async fn set(&self, key: &str, value: &str, ttl_secs: i64) -> Result<(), CacheError> {
            self.inner.set(key, value, ttl_secs).await
        }

        async fn del(&self, key: &str) -> Result<bool, CacheError> {
            self.inner.del(key).await
        }

        async fn has(&self, _key: &str) -> Result<bool, CacheError> {
            Err(CacheError::Store("connection refused".into()))
        }
    }

    fn sample_table() -> RateTable {
        RateTable::new(vec![
            RateEntry::buy_sell(USD, UAH, 38.0, 39.0),
            RateEntry::cross(EUR, UAH, 42.0),
        ])
    }

    fn service<'a>(provider: &'a MockProvider) -> RateService<MemoryStore, &'a MockProvider> {
        RateService::new(MemoryStore::new(), provider, 60)
    }

    #[tokio::test]
    async fn test_miss_fetches_then_hit_serves_from_cache() {
        let provider = MockProvider::with_table(sample_table());
        let service = service(&provider);

        let first = service.current_rates().await.unwrap();
        let second = service.current_rates().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_update_rates_forces_a_refetch() {
        let provider = MockProvider::with_table(sample_table());
        let service = service(&provider);

        service.current_rates().await.unwrap();
        service.update_rates().await.unwrap();

        assert_eq!(provider.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_provider_response_surfaces_empty_rates() {
        let provider = MockProvider::empty();
        let service = service(&provider);

        let err = service.current_rates().await.unwrap_err();

        assert!(matches!(err, AppError::Upstream(msg) if msg == "empty rates"));
    }

    #[tokio::test]
    async fn test_read_outage_falls_back_to_fetch() {
        let provider = MockProvider::with_table(sample_table());
        let store = ReadOutageStore {
            inner: MemoryStore::new(),
        };
        let service = RateService::new(store, &provider, 60);

        let table = service.current_rates().await.unwrap();
        assert_eq!(table, sample_table());
        assert_eq!(provider.fetch_count(), 1);

        // The read path stays down, so every request refetches.
        service.current_rates().await.unwrap();
        assert_eq!(provider.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_available_currencies_sorted() {
        let provider = MockProvider::with_table(sample_table());
        let service = service(&provider);

        let currencies = service.available_currencies().await.unwrap();

        assert_eq!(currencies, vec![USD, EUR, UAH]);
    }

    #[tokio::test]
    async fn test_convert_single_through_service() {
        let provider = MockProvider::with_table(sample_table());
        let service = service(&provider);

        let result = service
            .convert(ConvertRequest {
                amount: 100.0,
                currency_from: USD,
                currency_to: UAH,
            })
            .await
            .unwrap();

        assert_eq!(result.amount, 3900.0);
        assert_eq!(result.kind, ConversionKind::Single);
        assert_eq!(result.exchanges, vec![USD, UAH]);
    }

    #[tokio::test]
    async fn test_convert_double_through_service() {
        let provider = MockProvider::with_table(sample_table());
        let service = service(&provider);

        let result = service
            .convert(ConvertRequest {
                amount: 100.0,
                currency_from: USD,
                currency_to: EUR,
            })
            .await
            .unwrap();

        assert_eq!(result.kind, ConversionKind::Double);
        assert_eq!(result.exchanges, vec![USD, UAH, EUR]);
        assert_eq!(result.amount, 100.0 * 39.0 / 42.0);
    }

    #[tokio::test]
    async fn test_convert_rejects_non_positive_amount() {
        let provider = MockProvider::with_table(sample_table());
        let service = service(&provider);

        let err = service
            .convert(ConvertRequest {
                amount: 0.0,
                currency_from: USD,
                currency_to: UAH,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(provider.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_convert_rejects_same_currency() {
        let provider = MockProvider::with_table(sample_table());
        let service = service(&provider);

        let err = service
            .convert(ConvertRequest {
                amount: 100.0,
                currency_from: USD,
                currency_to: USD,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_convert_unknown_direction() {
        let provider = MockProvider::with_table(sample_table());
        let service = service(&provider);

        let err = service
            .convert(ConvertRequest {
                amount: 100.0,
                currency_from: CurrencyCode(985),
                currency_to: CurrencyCode(826),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(msg) if msg == "exchange direction not found"));
    }
}
