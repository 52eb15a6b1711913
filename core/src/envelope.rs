/// Envelope is the success/error shape shared by every remote response.
///
/// Each response carries an integer `errcode` and a human readable `errmsg`
/// next to its operation specific fields. `errcode == 0` is success; any
/// other value is an application level failure, in which case the decoded
/// fields are still handed back to the caller.
pub trait Envelope {
    /// The `errcode` field.
    fn errcode(&self) -> i64;

    /// The `errmsg` field.
    fn errmsg(&self) -> &str;

    /// Whether the remote platform accepted the call.
    fn is_success(&self) -> bool {
        self.errcode() == 0
    }
}

/// A response that carries nothing but the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BaseResponse {
    /// Error code, `0` on success.
    #[serde(default)]
    pub errcode: i64,
    /// Error message.
    #[serde(default)]
    pub errmsg: String,
}

impl Envelope for BaseResponse {
    fn errcode(&self) -> i64 {
        self.errcode
    }

    fn errmsg(&self) -> &str {
        &self.errmsg
    }
}

/// Implement [`Envelope`] for structs with public `errcode: i64` and
/// `errmsg: String` fields.
///
/// ```
/// use b2bpay_core::{impl_envelope, Envelope};
///
/// #[derive(serde::Deserialize)]
/// struct GetAppKeyResponse {
///     app_key: String,
///     errcode: i64,
///     errmsg: String,
/// }
///
/// impl_envelope!(GetAppKeyResponse);
/// ```
#[macro_export]
macro_rules! impl_envelope {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Envelope for $ty {
                fn errcode(&self) -> i64 {
                    self.errcode
                }

                fn errmsg(&self) -> &str {
                    &self.errmsg
                }
            }
        )+
    };
}
