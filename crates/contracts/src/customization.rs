use serde::{Deserialize, Serialize};

// ============================================================================
// Customization aggregate
// ============================================================================

/// Landing-page customization. Lives as a single JSON blob in browser
/// storage; there is no remote side for this aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    pub hero: HeroSection,
    pub features: Vec<FeatureCard>,
    pub testimonials: Vec<Testimonial>,
    pub sections: Vec<SectionConfig>,
    pub styles: GlobalStyles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title_ar: String,
    pub title_en: String,
    pub subtitle_ar: String,
    pub subtitle_en: String,
    pub button_ar: String,
    pub button_en: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCard {
    pub id: String,
    pub icon: String,
    pub title_ar: String,
    pub title_en: String,
    pub body_ar: String,
    pub body_en: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    pub quote_ar: String,
    pub quote_en: String,
    /// 1..=5 stars.
    pub rating: u8,
}

/// Visibility and ordering of a landing-page section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub key: String,
    pub visible: bool,
    pub rank: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyles {
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub font_scale: f32,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            hero: HeroSection {
                title_ar: "خدمات مالية رقمية موثوقة".into(),
                title_en: "Trusted digital financial services".into(),
                subtitle_ar: "نساعدك في فتح وتفعيل حساباتك المالية حول العالم".into(),
                subtitle_en: "We open and activate your financial accounts worldwide".into(),
                button_ar: "تصفح الخدمات".into(),
                button_en: "Browse services".into(),
                visible: true,
            },
            features: vec![
                FeatureCard {
                    id: "speed".into(),
                    icon: "zap".into(),
                    title_ar: "تسليم سريع".into(),
                    title_en: "Fast delivery".into(),
                    body_ar: "معظم الطلبات تُنجز خلال ٢٤ ساعة".into(),
                    body_en: "Most orders are completed within 24 hours".into(),
                },
                FeatureCard {
                    id: "support".into(),
                    icon: "headset".into(),
                    title_ar: "دعم متواصل".into(),
                    title_en: "Ongoing support".into(),
                    body_ar: "فريق الدعم متاح طوال أيام الأسبوع".into(),
                    body_en: "Support team available seven days a week".into(),
                },
                FeatureCard {
                    id: "trust".into(),
                    icon: "shield".into(),
                    title_ar: "موثوقية كاملة".into(),
                    title_en: "Fully trusted".into(),
                    body_ar: "مئات العملاء يتعاملون معنا منذ سنوات".into(),
                    body_en: "Hundreds of customers have worked with us for years".into(),
                },
            ],
            testimonials: vec![Testimonial {
                id: "t1".into(),
                author: "Ahmed M.".into(),
                quote_ar: "خدمة ممتازة وتسليم أسرع من المتوقع".into(),
                quote_en: "Excellent service, delivered faster than expected".into(),
                rating: 5,
            }],
            sections: vec![
                SectionConfig {
                    key: "hero".into(),
                    visible: true,
                    rank: 1,
                },
                SectionConfig {
                    key: "services".into(),
                    visible: true,
                    rank: 2,
                },
                SectionConfig {
                    key: "testimonials".into(),
                    visible: true,
                    rank: 3,
                },
            ],
            styles: GlobalStyles {
                primary_color: "#1d4ed8".into(),
                accent_color: "#f59e0b".into(),
                background_color: "#0f172a".into(),
                font_scale: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_object_shape() {
        let c = Customization::default();
        assert_eq!(c.features.len(), 3);
        assert_eq!(c.testimonials.len(), 1);
        assert_eq!(c.sections.len(), 3);
        assert!(c.hero.visible);
    }

    #[test]
    fn round_trips_through_json() {
        let c = Customization::default();
        let json = serde_json::to_string(&c).unwrap();
        let back: Customization = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
