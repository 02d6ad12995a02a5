mod csv;
mod types;
mod validator;
mod yahoo;

pub use csv::CsvConnector;
pub use types::{PriceBar, PriceColumn};
pub use validator::DataValidator;
pub use yahoo::YahooConnector;
