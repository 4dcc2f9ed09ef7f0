use crate::kernel::Kernel;

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl<T> serde::Serialize for Kernel<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Kernel", 2)?;
        state.serialize_field("data", self.as_slice())?;
        state.serialize_field("shape", &self.shape())?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Kernel<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct KernelData<T> {
            data: Vec<T>,
            shape: [usize; 2],
        }

        let KernelData { data, shape } = KernelData::deserialize(deserializer)?;

        Kernel::from_shape_vec(shape, data).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::Kernel;

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let kernel = Kernel::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6])?;
        let serialized = serde_json::to_string(&kernel)?;
        assert_eq!(serialized, r#"{"data":[1,2,3,4,5,6],"shape":[2,3]}"#);
        let deserialized: Kernel<u8> = serde_json::from_str(&serialized)?;
        assert_eq!(kernel, deserialized);
        Ok(())
    }

    #[test]
    fn test_serde_rejects_bad_shape() {
        let res = serde_json::from_str::<Kernel<f64>>(r#"{"data":[1.0,2.0,3.0],"shape":[2,2]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_serde_rejects_overflowing_shape() {
        let res = serde_json::from_str::<Kernel<f64>>(
            r#"{"data":[],"shape":[9223372036854775808,2]}"#,
        );
        let err = res.unwrap_err();
        assert!(err.to_string().contains("Shape overflow"));
    }
}
