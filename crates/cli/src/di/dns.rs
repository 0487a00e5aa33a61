use fatcat_dns_application::use_cases::HandleQueryUseCase;
use fatcat_dns_domain::config::CacheConfig;
use fatcat_dns_domain::Config;
use fatcat_dns_infrastructure::dns::{
    AnswerCache, Clock, EngineSettings, RandomTransactionIds, ResolutionEngine, SystemClock,
    UdpSocketFactory,
};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub cache: Arc<AnswerCache>,
    pub handle_query: Arc<HandleQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let cache = Arc::new(Self::build_cache(&config.cache, clock.as_ref())?);

        let sockets = Arc::new(UdpSocketFactory::new(
            config.resolver.bind_address,
            config.resolver.max_datagram_size,
        ));
        let ids = Arc::new(RandomTransactionIds::new(
            config.resolver.transaction_id_space,
        ));

        let resolver = Arc::new(ResolutionEngine::new(
            cache.clone(),
            clock,
            sockets,
            ids,
            EngineSettings::from(&config.resolver),
        ));

        let handle_query = Arc::new(HandleQueryUseCase::new(resolver));

        Ok(Self {
            cache,
            handle_query,
        })
    }

    fn build_cache(config: &CacheConfig, clock: &dyn Clock) -> anyhow::Result<AnswerCache> {
        let cache = AnswerCache::new();
        let now = clock.now_secs();

        for seed in &config.seeds {
            let seed = seed
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid cache seed: {}", e))?;

            match seed.ttl {
                Some(ttl) => cache.insert(&seed.domain, seed.kind, seed.answer, ttl, now),
                None => cache.insert_permanent(&seed.domain, seed.kind, seed.answer),
            }
        }

        info!(entries = cache.len(), "Answer cache seeded");
        Ok(cache)
    }
}
