use bjadvisor::{
    Advisor, AdvisorOptions, CountStatus, Rank, Recommendation, Rules, parse_cards,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmAdvisor {
    advisor: Advisor,
}

#[wasm_bindgen]
impl WasmAdvisor {
    #[wasm_bindgen(constructor)]
    pub fn new(decks: u8, hits_soft_17: bool, double_after_split: bool, surrender: bool) -> Self {
        Self {
            advisor: Advisor::new(options(decks, hits_soft_17, double_after_split, surrender)),
        }
    }

    pub fn reconfigure(
        &mut self,
        decks: u8,
        hits_soft_17: bool,
        double_after_split: bool,
        surrender: bool,
    ) {
        self.advisor
            .reconfigure(options(decks, hits_soft_17, double_after_split, surrender));
    }

    pub fn add_card(&mut self, label: &str) -> Result<(), JsValue> {
        let rank = label.parse::<Rank>().map_err(js_err)?;
        self.advisor.record_card(rank);
        Ok(())
    }

    pub fn observe(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let parsed = self.advisor.observe(text);
        to_js_value(&JsParsed {
            cards: parsed.cards.iter().map(|rank| rank.label()).collect(),
            rejected: parsed.rejected,
        })
    }

    pub fn undo_last_card(&mut self) -> Result<(), JsValue> {
        self.advisor.undo_last_card().map(|_| ()).map_err(js_err)
    }

    pub fn reset(&mut self) {
        self.advisor.reset_count();
    }

    pub fn recommend(&self, hand: &str, upcard: &str) -> Result<JsValue, JsValue> {
        let recommendation = self.advisor.recommend(hand, upcard).map_err(js_err)?;
        to_js_value(&JsRecommendation::from(recommendation))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let options = self.advisor.options();
        let snapshot = Snapshot {
            status: JsStatus::from(self.advisor.status()),
            decks: options.decks,
            hits_soft_17: options.rules.dealer_hits_soft_17(),
            double_after_split: options.rules.double_after_split,
            surrender: options.rules.surrender,
        };
        to_js_value(&snapshot)
    }
}

/// Validates a hand without touching the count.
#[wasm_bindgen]
pub fn parse_hand(text: &str) -> Result<JsValue, JsValue> {
    let parsed = parse_cards(text);
    to_js_value(&JsParsed {
        cards: parsed.cards.iter().map(|rank| rank.label()).collect(),
        rejected: parsed.rejected,
    })
}

fn options(
    decks: u8,
    hits_soft_17: bool,
    double_after_split: bool,
    surrender: bool,
) -> AdvisorOptions {
    AdvisorOptions::default().with_decks(decks).with_rules(
        Rules::default()
            .with_stand_on_soft_17(!hits_soft_17)
            .with_double_after_split(double_after_split)
            .with_surrender(surrender),
    )
}

#[derive(Serialize)]
struct Snapshot {
    status: JsStatus,
    decks: u8,
    hits_soft_17: bool,
    double_after_split: bool,
    surrender: bool,
}

#[derive(Serialize)]
struct JsStatus {
    running_count: i32,
    true_count: f64,
    cards_seen: u32,
    decks_remaining: f64,
    bet_units: u8,
}

impl From<CountStatus> for JsStatus {
    fn from(status: CountStatus) -> Self {
        Self {
            running_count: status.running_count,
            true_count: status.true_count,
            cards_seen: status.cards_seen,
            decks_remaining: status.decks_remaining,
            bet_units: status.bet_units,
        }
    }
}

#[derive(Serialize)]
struct JsParsed {
    cards: Vec<&'static str>,
    rejected: Vec<String>,
}

#[derive(Serialize)]
struct JsRecommendation {
    basic: &'static str,
    action: &'static str,
    insurance: bool,
    explanation: String,
    true_count: f64,
}

impl From<Recommendation> for JsRecommendation {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            basic: recommendation.basic.as_str(),
            action: recommendation.action.as_str(),
            insurance: recommendation.insurance,
            explanation: recommendation.explanation,
            true_count: recommendation.true_count,
        }
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
