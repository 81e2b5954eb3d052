//! Hardcoded offline dataset.
//!
//! Used only when the remote backend is unreachable and no local-storage
//! snapshot exists yet. The list mirrors the services the business actually
//! brokers; prices are display strings, not amounts.

use contracts::domain::payment_method::PaymentMethod;
use contracts::domain::service::Service;
use contracts::domain::site_settings::SiteSettings;

fn service(id: &str, name: &str, price: &str, order: i32) -> Service {
    Service {
        id: id.into(),
        name: name.into(),
        price: price.into(),
        order,
        active: true,
        description: None,
        category: None,
        features: Vec::new(),
        processing_time: None,
        featured: false,
        original_price: None,
        tags: Vec::new(),
        image_url: None,
    }
}

pub fn default_services() -> Vec<Service> {
    vec![
        service("default-01", "PayPal Personal Account", "15$", 1),
        service("default-02", "PayPal Business Account", "25$", 2),
        service("default-03", "Payoneer Account", "30$", 3),
        service("default-04", "Wise Account", "30$", 4),
        service("default-05", "Skrill Account", "20$", 5),
        service("default-06", "Neteller Account", "20$", 6),
        service("default-07", "Perfect Money Account", "15$", 7),
        service("default-08", "WebMoney Account", "15$", 8),
        service("default-09", "Binance Account Verification", "35$", 9),
        service("default-10", "Bybit Account Verification", "30$", 10),
        service("default-11", "OKX Account Verification", "30$", 11),
        service("default-12", "KuCoin Account Verification", "25$", 12),
        service("default-13", "Deel Account", "40$", 13),
        service("default-14", "Mercury Business Banking", "50$", 14),
        service("default-15", "Stripe Account Setup", "60$", 15),
        service("default-16", "Exness Broker Account", "20$", 16),
        service("default-17", "XM Broker Account", "20$", 17),
    ]
}

pub fn default_payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: "default-pm-01".into(),
            name: "Vodafone Cash".into(),
            details: "01012345678".into(),
            active: true,
        },
        PaymentMethod {
            id: "default-pm-02".into(),
            name: "USDT (TRC20)".into(),
            details: "TWd2yzw5yyXBLDg9zVHMbMWk1zKGFmW3Vq".into(),
            active: true,
        },
    ]
}

pub fn default_site_settings() -> SiteSettings {
    SiteSettings::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_dataset_shape() {
        let services = default_services();
        assert_eq!(services.len(), 17);
        assert!(services.iter().all(|s| s.active));
        // Ranks come pre-sorted so the landing page renders them as-is.
        assert!(services.windows(2).all(|w| w[0].order <= w[1].order));

        assert_eq!(default_payment_methods().len(), 2);
    }
}
