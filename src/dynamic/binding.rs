use std::borrow::Cow;

use log::debug;

use super::{DynFunc, DynPtr, DynSlice, ElementTypeIncompatibleError, Kind, SignatureError, SortError, Value};

/// How an element has to be adjusted before it can be passed to a comparator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indirection {
    /// The element kind is the parameter kind.
    Direct,
    /// The comparator takes pointers to elements, so each element is passed by address.
    AddressOf,
    /// Elements are pointers to the parameter kind, so each is dereferenced.
    Deref,
    /// The comparator takes [`Kind::Any`], so elements are passed as they are.
    Erase,
    /// The slice holds [`Kind::Any`], so each element is adjusted according to its own kind.
    PerElement,
}

/// A comparator that has been checked against a particular slice.
///
/// Binding validates everything up front, so a sort driven by a binding never fails halfway:
/// 1. The comparator takes exactly two parameters of identical kind and returns exactly one bool.
/// 2. The slice's element kind is the parameter kind, a pointer to it, or what it points to; or
///    the parameter kind is [`Kind::Any`]; or the element kind is [`Kind::Any`] and every element
///    individually passes the same test.
#[derive(Debug, Clone)]
pub struct ComparatorBinding {
    param: Kind,
    indirection: Indirection,
}

impl ComparatorBinding {
    pub fn bind(slice: &DynSlice, func: &DynFunc) -> Result<ComparatorBinding, SortError> {
        let param = check_signature(func)?;

        let indirection = if slice.elem().is_any() {
            for (i, item) in slice.iter().enumerate() {
                let elem = item.kind();
                if adjustment(&param, &elem).is_none() {
                    debug!("rejecting comparator over {}: element {} is {}", param, i, elem);
                    return Err(ElementTypeIncompatibleError { param, elem, index: Some(i) }.into());
                }
            }
            Indirection::PerElement
        } else {
            match adjustment(&param, slice.elem()) {
                Some(indirection) => indirection,
                None => {
                    debug!("rejecting comparator over {} for slice of {}", param, slice.elem());
                    return Err(ElementTypeIncompatibleError {
                        param,
                        elem: slice.elem().clone(),
                        index: None,
                    }
                    .into());
                },
            }
        };

        Ok(ComparatorBinding { param, indirection })
    }

    /// The kind both of the comparator's parameters expect.
    pub const fn param(&self) -> &Kind {
        &self.param
    }

    pub const fn indirection(&self) -> &Indirection {
        &self.indirection
    }

    /// Adjusts an element so that it can be passed as the comparator's parameter.
    pub(crate) fn adjust<'a>(&self, item: &'a Value) -> Cow<'a, Value> {
        let indirection = match &self.indirection {
            Indirection::PerElement => {
                // Binding already checked every element, Direct is only a fallback.
                adjustment(&self.param, &item.kind()).unwrap_or(Indirection::Direct)
            },
            other => other.clone(),
        };

        match indirection {
            Indirection::Direct | Indirection::Erase | Indirection::PerElement => Cow::Borrowed(item),
            Indirection::AddressOf => Cow::Owned(Value::Ptr(DynPtr::to(item.clone()))),
            Indirection::Deref => match item {
                Value::Ptr(ptr) => match ptr.target() {
                    Some(target) => Cow::Borrowed(target),
                    None => Cow::Owned(ptr.pointee().zero()),
                },
                other => Cow::Borrowed(other),
            },
        }
    }
}

fn check_signature(func: &DynFunc) -> Result<Kind, SignatureError> {
    let signature = func.signature();

    let (first, second) = match signature.params.as_slice() {
        [first, second] => (first, second),
        params => return Err(SignatureError::Arity { found: params.len() }),
    };
    if first != second {
        return Err(SignatureError::ParamMismatch {
            first: first.clone(),
            second: second.clone(),
        });
    }

    match signature.results.as_slice() {
        [Kind::Bool] => Ok(first.clone()),
        [other] => Err(SignatureError::ResultKind { found: other.clone() }),
        results => Err(SignatureError::ResultCount { found: results.len() }),
    }
}

// Works out how to pass an element of kind `elem` as `param`, if it can be passed at all.
fn adjustment(param: &Kind, elem: &Kind) -> Option<Indirection> {
    if param == elem {
        Some(Indirection::Direct)
    } else if param.is_any() {
        Some(Indirection::Erase)
    } else if param.pointee() == Some(elem) {
        Some(Indirection::AddressOf)
    } else if elem.pointee() == Some(param) {
        Some(Indirection::Deref)
    } else {
        None
    }
}
