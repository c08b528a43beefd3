//! Spanish stop words.
//!
//! Stop words are excluded from co-occurrence counting during learning.
//! The list is written in normalized form (no accents) because it is only
//! ever compared against normalized comment words.
//!
//! # Examples
//!
//! ```
//! use glosa::analysis::StopWords;
//!
//! let stop_words = StopWords::spanish();
//! assert!(stop_words.contains("porque"));
//! assert!(!stop_words.contains("maleta"));
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Default Spanish stop words list.
pub const DEFAULT_SPANISH_STOP_WORDS: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "lo", "como", "mas", "pero", "sus", "le", "ya", "o", "este",
    "si", "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "tambien", "me", "hasta",
    "hay", "donde", "quien", "desde", "todo", "nos", "durante", "todos", "uno", "les", "ni",
    "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mi", "antes", "algunos",
    "unos", "yo", "otro", "otras", "otra", "el", "tanto", "esa", "estos", "mucho", "quienes",
    "nada", "muchos", "cual", "poco", "ella", "estar", "estas", "algunas", "algo", "nosotros",
    "mis", "tu", "te", "ti", "tus", "ellas", "nosotras", "vosotros", "vosotras", "os", "mio",
    "mia", "mios", "mias", "tuyo", "tuya", "tuyos", "tuyas", "suyo", "suya", "suyos", "suyas",
    "nuestro", "nuestra", "nuestros", "nuestras", "vuestro", "vuestra", "vuestros", "vuestras",
    "esos", "esas", "estoy", "estas", "estamos", "estais", "estan", "este", "estes", "estemos",
    "esteis", "esten", "estare", "estaras", "estara", "estaremos", "estareis", "estaran",
    "estaria", "estarias", "estariamos", "estariais", "estarian", "estaba", "estabas",
    "estabamos", "estabais", "estaban", "estuve", "estuviste", "estuvo", "estuvimos",
    "estuvisteis", "estuvieron", "estuviera", "estuvieras", "estuvieramos", "estuvierais",
    "estuvieran", "estuviese", "estuvieses", "estuviesemos", "estuvieseis", "estuviesen",
    "estando", "estado", "estada", "estados", "estadas", "estad", "he", "has", "ha", "hemos",
    "habeis", "han", "haya", "hayas", "hayamos", "hayais", "hayan", "habre", "habras", "habra",
    "habremos", "habreis", "habran", "habria", "habrias", "habriamos", "habriais", "habrian",
    "habia", "habias", "habiamos", "habiais", "habian", "hube", "hubiste", "hubo", "hubimos",
    "hubisteis", "hubieron", "hubiera", "hubieras", "hubieramos", "hubierais", "hubieran",
    "hubiese", "hubieses", "hubiesemos", "hubieseis", "hubiesen", "habiendo", "habido",
    "habida", "habidos", "habidas", "soy", "eres", "es", "somos", "sois", "son", "sea", "seas",
    "seamos", "seais", "sean", "sere", "seras", "sera", "seremos", "sereis", "seran", "seria",
    "serias", "seriamos", "seriais", "serian", "era", "eras", "eramos", "erais", "eran", "fui",
    "fuiste", "fue", "fuimos", "fuisteis", "fueron", "fuera", "fueras", "fueramos", "fuerais",
    "fueran", "fuese", "fueses", "fuesemos", "fueseis", "fuesen", "sintiendo", "sentido",
    "sentida", "sentidos", "sentidas", "siente", "sentid", "tengo", "tienes", "tiene",
    "tenemos", "teneis", "tienen", "tenga", "tengas", "tengamos", "tengais", "tengan",
    "tendre", "tendras", "tendra", "tendremos", "tendreis", "tendran", "tendria", "tendrias",
    "tendriamos", "tendriais", "tendrian", "tenia", "tenias", "teniamos", "teniais", "tenian",
    "tuve", "tuviste", "tuvo", "tuvimos", "tuvisteis", "tuvieron", "tuviera", "tuvieras",
    "tuvieramos", "tuvierais", "tuvieran", "tuviese", "tuvieses", "tuviesemos", "tuvieseis",
    "tuviesen", "teniendo", "tenido", "tenida", "tenidos", "tenidas", "tened",
];

static DEFAULT_SPANISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_SPANISH_STOP_WORDS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
});

/// A set of stop words.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: Arc<HashSet<String>>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::spanish()
    }
}

impl StopWords {
    /// The default Spanish list, shared between instances.
    pub fn spanish() -> Self {
        Self {
            words: Arc::clone(&DEFAULT_SPANISH_STOP_WORDS_SET),
        }
    }

    /// A custom stop word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
