//! `serde` support: a [`SharedVec`] serializes as a plain sequence of its
//! viewed elements.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SharedVec;

impl<T: Serialize> Serialize for SharedVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SharedVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(SharedVec::from_vec)
    }
}

#[cfg(test)]
mod tests {
    use crate::SharedVec;

    #[test]
    fn serializes_only_the_window() {
        let shared = SharedVec::from([1, 2, 3, 4]).slice(1..3);
        assert_eq!(serde_json::to_string(&shared).unwrap(), "[2,3]");
    }

    #[test]
    fn deserializes_from_json_array() {
        let shared: SharedVec<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(shared, vec!["a".to_string(), "b".to_string()]);
    }
}
