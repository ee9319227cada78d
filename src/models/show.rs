use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: String,
    pub title: String,
    // Метка для отображения, не парсится
    pub time: String,
}

impl Show {
    pub fn new(id: impl Into<String>, title: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            time: time.into(),
        }
    }
}
