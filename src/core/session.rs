use crate::config::{AramexConfig, Environment};
use crate::core::binding::Binding;
use crate::core::service::LogicalService;
use crate::domain::model::ClientInfo;
use crate::domain::ports::{BindingFactory, BindingTarget};
use crate::utils::error::{AramexError, Result};
use crate::utils::validation::Validate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::OnceCell;
use url::Url;

type BindingSlot = Arc<OnceCell<Arc<Binding>>>;

struct SessionState {
    config: AramexConfig,
    /// 每個服務一格；同時進行的建立共用同一格，只會建立一次
    bindings: HashMap<LogicalService, BindingSlot>,
}

/// 持有配置與 binding 快取，並處理環境切換
pub struct SessionManager {
    state: Mutex<SessionState>,
    factory: Arc<dyn BindingFactory>,
}

impl SessionManager {
    pub fn new(config: AramexConfig, factory: Arc<dyn BindingFactory>) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            environment = ?config.environment,
            "Aramex session initialized"
        );
        Ok(Self {
            state: Mutex::new(SessionState {
                config,
                bindings: HashMap::new(),
            }),
            factory,
        })
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        // 臨界區內不會 panic，中毒時資料仍一致
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn client_info(&self) -> ClientInfo {
        self.state().config.client_info()
    }

    /// 目前配置的快照
    pub fn config(&self) -> AramexConfig {
        self.state().config.clone()
    }

    pub fn environment(&self) -> Environment {
        self.state().config.environment
    }

    pub fn endpoint_for(&self, service: LogicalService) -> Result<String> {
        resolve_endpoint(&self.state().config, service)
    }

    pub fn has_binding(&self, service: LogicalService) -> bool {
        self.state()
            .bindings
            .get(&service)
            .is_some_and(|slot| slot.initialized())
    }

    /// 快取命中時不做任何 I/O；建立失敗不會留下快取
    pub async fn resolve_binding(&self, service: LogicalService) -> Result<Arc<Binding>> {
        // 快取格與目標在同一次上鎖內取得，環境切換不會讓兩者錯開
        let (slot, target) = {
            let mut state = self.state();
            let slot = state.bindings.entry(service).or_default().clone();
            if let Some(binding) = slot.get() {
                tracing::debug!(service = %service, "Binding cache hit");
                return Ok(binding.clone());
            }
            let target = BindingTarget {
                service,
                endpoint: resolve_endpoint(&state.config, service)?,
                schema_dir: state.config.schema_dir.clone(),
                timeout: state.config.timeout(),
            };
            (slot, target)
        };

        let binding = slot
            .get_or_try_init(|| async move {
                tracing::debug!(
                    service = %service,
                    endpoint = %target.endpoint,
                    "Constructing binding"
                );
                let binding = self.factory.create(target).await.map_err(|e| {
                    tracing::warn!(service = %service, error = %e, "Binding construction failed");
                    e
                })?;
                Ok::<_, AramexError>(Arc::new(binding))
            })
            .await?;

        Ok(binding.clone())
    }

    /// 切換環境並丟棄所有服務的 binding
    pub fn set_environment(&self, environment: Environment) {
        let mut state = self.state();
        state.config.environment = environment;
        state.bindings = HashMap::new();
        tracing::info!(environment = ?environment, "Environment switched, bindings dropped");
    }

    pub fn set_sandbox(&self, sandbox: bool) {
        self.set_environment(if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        });
    }

    pub fn clear_bindings(&self) {
        self.state().bindings = HashMap::new();
        tracing::debug!("Bindings cleared");
    }
}

/// 服務端點；設定 base_url 時替換 scheme/host/port
fn resolve_endpoint(config: &AramexConfig, service: LogicalService) -> Result<String> {
    let endpoint = service.endpoint(config.environment);
    let Some(base_url) = &config.base_url else {
        return Ok(endpoint.to_string());
    };

    let base = Url::parse(base_url)
        .map_err(|e| AramexError::config("base_url", format!("Invalid URL format: {}", e)))?;
    let mut url = Url::parse(endpoint).map_err(|e| AramexError::BindingConstructionError {
        service: service.to_string(),
        reason: format!("invalid endpoint {}: {}", endpoint, e),
    })?;

    let rewrite_failed = |what: &str| AramexError::config("base_url", format!("cannot apply {}", what));
    url.set_scheme(base.scheme())
        .map_err(|_| rewrite_failed("scheme"))?;
    url.set_host(base.host_str())
        .map_err(|e| rewrite_failed(&format!("host: {}", e)))?;
    url.set_port(base.port()).map_err(|_| rewrite_failed("port"))?;

    Ok(url.to_string())
}
