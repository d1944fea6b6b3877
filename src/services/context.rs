use uuid::Uuid;

/// Per-request context passed into service calls. The acting user id comes
/// from the `X-User-Id` header, a stand-in for real session auth.
#[derive(Clone, Copy, Debug)]
pub struct RequestContext {
    pub user_id: Uuid,
}
