//! Route handlers.
//!
//! Every handler has the shape
//! `async fn(Arc<Config>, Query, ResponseSink) -> Completed` and always
//! completes its sink, whatever happens. Failures never cross the handler
//! boundary: each maps its own errors to a fixed body and logs the cause.

use crate::router::RouterBuilder;

pub mod archive;
pub mod colors;
pub mod countries;
pub mod dates;
pub mod files;
pub mod greeting;
pub mod identity;
pub mod joke;
pub mod memory;
pub mod url_info;

pub const GET: &str = "/get";
pub const DAYS_BETWEEN_DATES: &str = "/DaysBetweenDates";
pub const VALIDATE_SPANISH_DNI: &str = "/ValidateSpanishDNI";
pub const RETURN_COLOR_CODE: &str = "/ReturnColorCode";
pub const TELL_ME_A_JOKE: &str = "/TellMeAJoke";
pub const PARSE_URL: &str = "/ParseUrl";
pub const LIST_FILES: &str = "/ListFiles";
pub const GET_FULL_TEXT_FILE: &str = "/GetFullTextFile";
pub const CALCULATE_MEMORY_CONSUMPTION: &str = "/CalculateMemoryConsumption";
pub const MAKE_ZIP_FILE: &str = "/MakeZipFile";
pub const RANDOM_EUROPEAN_COUNTRY: &str = "/RandomEuropeanCountry";

/// Adds every service route to `builder`.
pub fn register(builder: RouterBuilder) -> RouterBuilder {
    builder
        .route(GET, greeting::handle)
        .route(DAYS_BETWEEN_DATES, dates::handle)
        .route(VALIDATE_SPANISH_DNI, identity::handle)
        .route(RETURN_COLOR_CODE, colors::handle)
        .route(TELL_ME_A_JOKE, joke::handle)
        .route(PARSE_URL, url_info::handle)
        .route(LIST_FILES, files::list)
        .route(GET_FULL_TEXT_FILE, files::full_text)
        .route(CALCULATE_MEMORY_CONSUMPTION, memory::handle)
        .route(MAKE_ZIP_FILE, archive::handle)
        .route(RANDOM_EUROPEAN_COUNTRY, countries::handle)
}
