pub mod metrics_cards;

pub use metrics_cards::MetricsCards;
