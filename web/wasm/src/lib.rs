use hogerlager::{
    Card, GuessOutcome, Locale, Phase, Press, Response, Round, RoundOptions, Suit, View,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The page hit-tests clicks against its button images and calls
/// `press_up`, `press_down` or `press_elsewhere`; it redraws from `view()`.
#[wasm_bindgen]
pub struct WasmRound {
    round: Round,
}

#[wasm_bindgen]
impl WasmRound {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, english: bool) -> Self {
        Self {
            round: Round::new(options(english), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32, english: bool) {
        self.round = Round::new(options(english), seed as u64);
    }

    pub fn restart(&mut self) {
        self.round.restart();
    }

    pub fn press_up(&mut self) -> Result<JsValue, JsValue> {
        self.press(Press::Up)
    }

    pub fn press_down(&mut self) -> Result<JsValue, JsValue> {
        self.press(Press::Down)
    }

    pub fn press_elsewhere(&mut self) -> Result<JsValue, JsValue> {
        self.press(Press::Elsewhere)
    }

    pub fn score(&self) -> u32 {
        self.round.score() as u32
    }

    pub fn cursor(&self) -> u32 {
        self.round.cursor() as u32
    }

    pub fn is_finished(&self) -> bool {
        self.round.is_finished()
    }

    pub fn result_text(&self) -> String {
        self.round.result_text()
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsView::from(self.round.view()))
    }
}

impl WasmRound {
    fn press(&mut self, press: Press) -> Result<JsValue, JsValue> {
        to_js_value(&JsResponse::from(self.round.press(press)))
    }
}

fn options(english: bool) -> RoundOptions {
    let locale = if english {
        Locale::English
    } else {
        Locale::Dutch
    };
    RoundOptions::default().with_locale(locale)
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsView {
    Playing { card: JsCard, score: u32 },
    Finished { score: u32, text: String },
}

impl From<View> for JsView {
    fn from(view: View) -> Self {
        match view {
            View::Playing { card, score } => Self::Playing {
                card: card_to_js(card),
                score: score as u32,
            },
            View::Finished { score, text } => Self::Finished {
                score: score as u32,
                text,
            },
        }
    }
}

#[derive(Serialize)]
struct JsOutcome {
    previous: JsCard,
    revealed: JsCard,
    correct: bool,
    score: u32,
    finished: bool,
}

impl From<GuessOutcome> for JsOutcome {
    fn from(outcome: GuessOutcome) -> Self {
        Self {
            previous: card_to_js(outcome.previous),
            revealed: card_to_js(outcome.revealed),
            correct: outcome.correct,
            score: outcome.score as u32,
            finished: outcome.phase == Phase::Finished,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsResponse {
    Restarted,
    Guessed { outcome: JsOutcome },
    Ignored,
}

impl From<Response> for JsResponse {
    fn from(response: Response) -> Self {
        match response {
            Response::Restarted => Self::Restarted,
            Response::Guessed(outcome) => Self::Guessed {
                outcome: outcome.into(),
            },
            Response::Ignored => Self::Ignored,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
        Suit::Hearts => "Hearts",
        Suit::Spades => "Spades",
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
