//! Request descriptors produced by the generator.

use crate::generators::payload::OrderPayload;
use std::fmt;

/// HTTP method of a generated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Post,
    Get,
    Delete,
    Put,
}

impl Method {
    /// Uppercase wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Get => "GET",
            Self::Delete => "DELETE",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five request shapes issued within one outer step, in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BurstKind {
    /// `POST /orders` with a two-item payload
    CreateOrder,
    /// `GET /orders`
    ListOrders,
    /// `GET /orders/{n}`
    GetOrder,
    /// `DELETE /orders/{n}/cancel`
    CancelOrder,
    /// `PUT /orders/{n}/complete`
    CompleteOrder,
}

impl BurstKind {
    /// All burst kinds in the order they are issued within a step.
    pub const ALL: [BurstKind; 5] = [
        BurstKind::CreateOrder,
        BurstKind::ListOrders,
        BurstKind::GetOrder,
        BurstKind::CancelOrder,
        BurstKind::CompleteOrder,
    ];

    pub fn method(&self) -> Method {
        match self {
            Self::CreateOrder => Method::Post,
            Self::ListOrders | Self::GetOrder => Method::Get,
            Self::CancelOrder => Method::Delete,
            Self::CompleteOrder => Method::Put,
        }
    }
}

/// A single call to issue against the target.
///
/// Lives only for the duration of one call: it is built right before the
/// request is sent and dropped once the status has been reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    /// Present only for `POST /orders`.
    pub payload: Option<OrderPayload>,
}

impl RequestDescriptor {
    pub fn create_order(payload: OrderPayload) -> Self {
        Self {
            method: Method::Post,
            path: "/orders".to_string(),
            payload: Some(payload),
        }
    }

    pub fn list_orders() -> Self {
        Self {
            method: Method::Get,
            path: "/orders".to_string(),
            payload: None,
        }
    }

    pub fn get_order(id: u64) -> Self {
        Self {
            method: Method::Get,
            path: format!("/orders/{id}"),
            payload: None,
        }
    }

    pub fn cancel_order(id: u64) -> Self {
        Self {
            method: Method::Delete,
            path: format!("/orders/{id}/cancel"),
            payload: None,
        }
    }

    pub fn complete_order(id: u64) -> Self {
        Self {
            method: Method::Put,
            path: format!("/orders/{id}/complete"),
            payload: None,
        }
    }

    /// Serialize the payload to a JSON body, if there is one.
    pub fn body_json(&self) -> Result<Option<String>, serde_json::Error> {
        self.payload.as_ref().map(serde_json::to_string).transpose()
    }
}
