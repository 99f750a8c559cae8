use memrs::{MemoryGame, MemoryOptions, Slot};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmStore {
    game: MemoryGame,
}

#[wasm_bindgen]
impl WasmStore {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: MemoryGame::new(MemoryOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = MemoryGame::new(MemoryOptions::default(), seed as u64);
    }

    #[wasm_bindgen(js_name = allCards)]
    pub fn all_cards(&self) -> Result<JsValue, JsValue> {
        to_js_value(self.game.catalog())
    }

    #[wasm_bindgen(js_name = deckCards)]
    pub fn deck_cards(&self) -> Result<JsValue, JsValue> {
        to_js_value(self.game.deck())
    }

    pub fn counter(&self) -> f64 {
        self.game.score() as f64
    }

    #[wasm_bindgen(js_name = getCardDeck)]
    pub fn get_card_deck(&mut self, count: u32) -> Result<(), JsValue> {
        self.game.request_deck(count as usize).map_err(js_err)
    }

    #[wasm_bindgen(js_name = setCardDeck)]
    pub fn set_card_deck(&mut self, deck: JsValue) -> Result<(), JsValue> {
        if deck.is_undefined() || deck.is_null() {
            self.game.clear_deck();
            return Ok(());
        }

        let deck: Vec<Slot> = serde_wasm_bindgen::from_value(deck).map_err(js_err)?;
        self.game.set_deck(deck);
        Ok(())
    }

    #[wasm_bindgen(js_name = setCounter)]
    pub fn set_counter(&mut self, value: f64) -> f64 {
        self.game.set_score(value as i64) as f64
    }

    #[wasm_bindgen(js_name = clearSlot)]
    pub fn clear_slot(&mut self, index: u32) -> Result<Option<String>, JsValue> {
        self.game.clear_slot(index as usize).map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            deck: self.game.deck(),
            counter: self.game.score(),
            remaining: self.game.remaining_cards() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    deck: &'a [Slot],
    counter: u64,
    remaining: u32,
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
