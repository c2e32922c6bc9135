use serde::Serialize;

pub trait Method {
    type Response: serde::de::DeserializeOwned;
    type Params: Serialize;

    /// Path relative to the client's base URL, e.g. `/search`.
    fn path(params: &Self::Params) -> String;
}
