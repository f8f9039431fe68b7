use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to retrieve pilotage snapshots"))]
    Retrieval {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source(from(BoxedError, std::convert::identity)))]
        source: BoxedError,
    },
}
