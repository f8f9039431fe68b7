use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Http error"))]
    Http {
        #[snafu(implicit)]
        location: Location,
        source: http_client::Error,
    },
}

impl From<http_client::Error> for Error {
    #[track_caller]
    fn from(error: http_client::Error) -> Self {
        let caller = std::panic::Location::caller();
        Error::Http {
            location: Location::new(caller.file(), caller.line(), caller.column()),
            source: error,
        }
    }
}
