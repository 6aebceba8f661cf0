//! Glyphs share their intrinsic state (character and font) through a cache;
//! positions are extrinsic and supplied per call.

use std::rc::Rc;

use hashbrown::HashMap;

#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    symbol: char,
    font: String,
}

impl Glyph {
    pub fn render(&self, row: usize, column: usize) -> String {
        format!("'{}' in {} at ({row}, {column})", self.symbol, self.font)
    }
}

#[derive(Debug, Default)]
pub struct GlyphFactory {
    cache: HashMap<(char, String), Rc<Glyph>>,
}

impl GlyphFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared glyph for `(symbol, font)`, created on first request.
    pub fn get_flyweight(&mut self, symbol: char, font: &str) -> Rc<Glyph> {
        Rc::clone(
            self.cache
                .entry((symbol, font.to_string()))
                .or_insert_with(|| {
                    Rc::new(Glyph {
                        symbol,
                        font: font.to_string(),
                    })
                }),
        )
    }

    pub fn count(&self) -> usize {
        self.cache.len()
    }

    /// Cached keys as `"symbol/font"`, sorted.
    pub fn list_flyweights(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .cache
            .keys()
            .map(|(symbol, font)| format!("{symbol}/{font}"))
            .collect();
        keys.sort();
        keys
    }
}

/// Lays out `text` on one row, one shared glyph per distinct character.
pub fn typeset(factory: &mut GlyphFactory, text: &str, font: &str) -> Vec<String> {
    text.chars()
        .enumerate()
        .map(|(column, c)| factory.get_flyweight(c, font).render(0, column))
        .collect()
}
