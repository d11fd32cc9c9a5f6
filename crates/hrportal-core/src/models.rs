pub mod history;
pub mod message;
pub mod role;
pub mod wire;

pub(crate) mod serde_util {
    use serde::{Deserialize, Deserializer};

    /// Treat an explicit JSON `null` the same as a missing field.
    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
