/// A catalogued book.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub isbn: String,
    pub genre: String,
    pub author: String,
    pub price: i64,
}

/// Client-supplied fields for creating or replacing a book.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookRequest {
    pub title: String,
    pub isbn: String,
    pub genre: String,
    pub author: String,
    pub price: i64,
}

impl Book {
    pub fn from_request(id: u32, request: BookRequest) -> Self {
        Self {
            id,
            title: request.title,
            isbn: request.isbn,
            genre: request.genre,
            author: request.author,
            price: request.price,
        }
    }

    /// Overwrite every client-supplied field, keeping the id.
    pub fn apply(&mut self, request: BookRequest) {
        self.title = request.title;
        self.isbn = request.isbn;
        self.genre = request.genre;
        self.author = request.author;
        self.price = request.price;
    }
}
