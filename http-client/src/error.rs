use reqwest::StatusCode;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("HTTP request could not be performed"))]
    Request {
        #[snafu(implicit)]
        location: Location,
        source: reqwest::Error,
    },
    #[snafu(display("HTTP middleware error"))]
    Middleware {
        #[snafu(implicit)]
        location: Location,
        source: reqwest_middleware::Error,
    },
    #[snafu(display("HTTP request failed, status: '{status}', url: '{url}', body: '{body}'"))]
    FailedRequest {
        #[snafu(implicit)]
        location: Location,
        url: String,
        status: StatusCode,
        body: String,
    },
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Request { .. } | Error::Middleware { .. } => None,
            Error::FailedRequest { status, .. } => Some(*status),
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Request { .. } | Error::Middleware { .. } => None,
            Error::FailedRequest { body, .. } => Some(body),
        }
    }
}

impl From<reqwest::Error> for Error {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let caller = std::panic::Location::caller();
        Error::Request {
            location: Location::new(caller.file(), caller.line(), caller.column()),
            source: error,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    #[track_caller]
    fn from(error: reqwest_middleware::Error) -> Self {
        let caller = std::panic::Location::caller();
        match error {
            reqwest_middleware::Error::Reqwest(source) => Error::from(source),
            error => Error::Middleware {
                location: Location::new(caller.file(), caller.line(), caller.column()),
                source: error,
            },
        }
    }
}
