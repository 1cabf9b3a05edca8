use crate::adapters::HttpBindingFactory;
use crate::app::services::{LocationService, RateService, ShippingService, TrackingService};
use crate::config::{AramexConfig, Environment};
use crate::core::{Invoker, SessionManager};
use crate::domain::ports::BindingFactory;
use crate::utils::error::Result;
use std::sync::Arc;

/// 四個服務共用同一個 session，切換環境會同時影響全部服務
pub struct AramexSdk {
    session: Arc<SessionManager>,
    invoker: Invoker,
    shipping: ShippingService,
    tracking: TrackingService,
    rate: RateService,
    location: LocationService,
}

impl AramexSdk {
    /// 以 HTTP 傳輸與 WSDL 建立 binding
    pub fn new(config: AramexConfig) -> Result<Self> {
        Self::with_factory(config, Arc::new(HttpBindingFactory::new()))
    }

    pub fn with_factory(config: AramexConfig, factory: Arc<dyn BindingFactory>) -> Result<Self> {
        let session = Arc::new(SessionManager::new(config, factory)?);
        let invoker = Invoker::new(Arc::clone(&session));

        tracing::info!(
            environment = ?session.environment(),
            "Aramex SDK initialized"
        );

        Ok(Self {
            shipping: ShippingService::new(invoker.clone()),
            tracking: TrackingService::new(invoker.clone()),
            rate: RateService::new(invoker.clone()),
            location: LocationService::new(invoker.clone()),
            session,
            invoker,
        })
    }

    pub fn shipping(&self) -> &ShippingService {
        &self.shipping
    }

    pub fn tracking(&self) -> &TrackingService {
        &self.tracking
    }

    pub fn rate(&self) -> &RateService {
        &self.rate
    }

    pub fn location(&self) -> &LocationService {
        &self.location
    }

    /// 捨棄所有已建立的 binding，下一次呼叫會連到新環境
    pub fn set_environment(&self, environment: Environment) {
        self.session.set_environment(environment);
    }

    pub fn config(&self) -> AramexConfig {
        self.session.config()
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// 呼叫服務層未涵蓋的操作
    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{sample_config, MockFactory, MockTransport};
    use crate::core::LogicalService;
    use serde_json::json;

    #[tokio::test]
    async fn test_services_share_one_session() {
        let transport = Arc::new(MockTransport::returning(json!({"HasErrors": "false"})));
        let factory = Arc::new(MockFactory::with_transport(
            &["FetchCountries", "TrackPickup"],
            transport.clone(),
        ));
        let sdk = AramexSdk::with_factory(sample_config(), factory.clone()).unwrap();

        sdk.location().fetch_countries(None).await.unwrap();
        sdk.tracking().track_pickup("PKP-1", None).await.unwrap();
        sdk.location().fetch_countries(None).await.unwrap();
        assert_eq!(factory.constructions(), 2);
        assert!(sdk.session().has_binding(LogicalService::Location));

        sdk.set_environment(Environment::Production);
        assert_eq!(sdk.config().environment, Environment::Production);
        assert!(!sdk.session().has_binding(LogicalService::Location));

        sdk.location().fetch_countries(None).await.unwrap();
        assert_eq!(factory.constructions(), 3);
        assert!(factory
            .last_target()
            .unwrap()
            .endpoint
            .starts_with("https://ws.aramex.net/"));
    }

    #[tokio::test]
    async fn test_invoker_reaches_unwrapped_operations() {
        let transport = Arc::new(MockTransport::returning(json!({
            "HasErrors": "false",
            "Countries": {"Country": {"Code": "BH", "Name": "Bahrain"}}
        })));
        let factory = Arc::new(MockFactory::with_transport(&["FetchCountry"], transport));
        let sdk = AramexSdk::with_factory(sample_config(), factory).unwrap();

        let raw = sdk
            .invoker()
            .invoke(LogicalService::Location, "FetchCountry", json!({"Code": "BH"}))
            .await
            .unwrap();
        assert_eq!(raw["Countries"]["Country"]["Code"], json!("BH"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = sample_config();
        config.password = String::new();
        let err = AramexSdk::with_factory(config, Arc::new(MockFactory::new(&[]))).err();
        assert!(err.is_some());
    }
}
