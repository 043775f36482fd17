use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub messaging_domain: String,
    pub recipient_id: String,
    pub org_name: String,
    pub registration_fee: String,
    pub link_budget: usize,
    pub countdown_ticks: u32,
    pub cooldown: Duration,
    pub log_level: String,
    pub phone: PhoneRules,
}

/// Dialling plan the phone rule validates against. Kept configurable instead
/// of hard-coding one country's calling code.
#[derive(Debug, Clone)]
pub struct PhoneRules {
    pub country_code: String,
    pub trunk_prefix: String,
}

impl PhoneRules {
    /// Both parts feed a pattern; only digits are meaningful in a dialling plan.
    pub fn check(&self) -> Result<(), String> {
        for (name, value) in [
            ("country code", &self.country_code),
            ("trunk prefix", &self.trunk_prefix),
        ] {
            if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
                return Err(format!("Invalid phone {name}: {value:?}"));
            }
        }
        Ok(())
    }
}

impl FlowConfig {
    pub fn from_env() -> Result<Self, String> {
        let recipient_id = env_required("BOOKFLOW_RECIPIENT")?;

        let messaging_domain = env_or("BOOKFLOW_MESSAGING_DOMAIN", "wa.me");
        let org_name = env_or("BOOKFLOW_ORG_NAME", "Generali Global");
        let registration_fee = env_or("BOOKFLOW_REGISTRATION_FEE", "KES 1,500");

        let link_budget: usize = env_or("BOOKFLOW_LINK_BUDGET", "2000")
            .parse()
            .map_err(|e| format!("Invalid BOOKFLOW_LINK_BUDGET: {e}"))?;

        let countdown_ticks: u32 = env_or("BOOKFLOW_COUNTDOWN_TICKS", "3")
            .parse()
            .map_err(|e| format!("Invalid BOOKFLOW_COUNTDOWN_TICKS: {e}"))?;

        let cooldown_ms: u64 = env_or("BOOKFLOW_COOLDOWN_MS", "2000")
            .parse()
            .map_err(|e| format!("Invalid BOOKFLOW_COOLDOWN_MS: {e}"))?;

        let log_level = env_or("BOOKFLOW_LOG_LEVEL", "info");

        let phone = PhoneRules {
            country_code: env_or("BOOKFLOW_PHONE_COUNTRY_CODE", "254"),
            trunk_prefix: env_or("BOOKFLOW_PHONE_TRUNK_PREFIX", "0"),
        };
        phone.check()?;

        Ok(FlowConfig {
            messaging_domain,
            recipient_id,
            org_name,
            registration_fee,
            link_budget,
            countdown_ticks,
            cooldown: Duration::from_millis(cooldown_ms),
            log_level,
            phone,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
