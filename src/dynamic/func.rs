use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use log::warn;

use super::{compare, Kind, Typed, Value};

/// The declared parameter and result kinds of a [`DynFunc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<Kind>,
    pub results: Vec<Kind>,
}

impl Signature {
    pub fn new(params: impl Into<Vec<Kind>>, results: impl Into<Vec<Kind>>) -> Signature {
        Signature {
            params: params.into(),
            results: results.into(),
        }
    }
}

type Body = dyn Fn(&[&Value]) -> Vec<Value> + Send + Sync;

/// A function whose signature is only known at runtime.
///
/// The body receives borrowed arguments and returns its results as a [`Vec`]. Nothing stops a body
/// from returning something other than what its [`Signature`] declares; consumers such as
/// [`sort`](super::sort) validate the signature and treat anything unexpected in the results as
/// `false`.
#[derive(Clone)]
pub struct DynFunc {
    signature: Signature,
    body: Arc<Body>,
    natural: bool,
}

impl DynFunc {
    pub fn new<F>(signature: Signature, body: F) -> DynFunc
    where
        F: Fn(&[&Value]) -> Vec<Value> + Send + Sync + 'static,
    {
        DynFunc {
            signature,
            body: Arc::new(body),
            natural: false,
        }
    }

    /// Wraps a statically typed less-than closure as a `(T, T) -> bool` function.
    ///
    /// Arguments that can't be converted to `T` compare as not less.
    ///
    /// # Examples
    /// ```
    /// # use slice_kit::dynamic::{DynFunc, Kind, Value};
    /// let less = DynFunc::from_less(|a: &i64, b: &i64| a < b);
    /// assert_eq!(less.signature().params, [Kind::Int, Kind::Int]);
    /// assert_eq!(less.call(&[&Value::Int(1), &Value::Int(2)]), [Value::Bool(true)]);
    /// ```
    pub fn from_less<T, F>(less: F) -> DynFunc
    where
        T: Typed,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        let signature = Signature::new([T::kind(), T::kind()], [Kind::Bool]);
        DynFunc::new(signature, move |args| {
            let result = match args {
                [a, b] => match (T::from_value(a), T::from_value(b)) {
                    (Some(a), Some(b)) => less(&a, &b),
                    _ => false,
                },
                _ => false,
            };
            vec![Value::Bool(result)]
        })
    }

    /// An `(any, any) -> bool` function ordering values with [`compare::less`].
    ///
    /// [`sort`](super::sort) recognises this function and checks that the container's elements
    /// can all be ordered against each other before sorting, exactly like
    /// [`sort_natural`](super::sort_natural). Called directly, incomparable arguments give `false`.
    pub fn natural_less() -> DynFunc {
        let signature = Signature::new([Kind::Any, Kind::Any], [Kind::Bool]);
        let func = DynFunc::new(signature, |args| {
            let result = match args {
                [a, b] => compare::less(a, b).unwrap_or_else(|e| {
                    warn!("natural ordering failed: {}", e);
                    false
                }),
                _ => false,
            };
            vec![Value::Bool(result)]
        });
        DynFunc { natural: true, ..func }
    }

    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    pub(crate) const fn is_natural(&self) -> bool {
        self.natural
    }

    pub fn call(&self, args: &[&Value]) -> Vec<Value> {
        (self.body)(args)
    }
}

impl Debug for DynFunc {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynFunc")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
