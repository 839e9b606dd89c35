//! 方法
//!
//! 绑定到类型上的具名函数，参数与返回值都是有序的值序列。
//! 内置类型目前没有方法，这里只提供扩展点。

use crate::error::TypeError;
use crate::value::Value;
use std::fmt;

pub type MethodFn = fn(&[Value]) -> Result<Vec<Value>, TypeError>;

#[derive(Clone)]
pub struct Method {
    name: String,
    func: MethodFn,
}

impl Method {
    pub fn new(name: impl Into<String>, func: MethodFn) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Result<Vec<Value>, TypeError> {
        (self.func)(args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
