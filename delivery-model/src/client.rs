/// Fetch capability used to reload a resource.
///
/// `resource` is the snake_case name of the resource type (`entry`, `asset`,
/// `content_type`, `space`). Timeouts, retries and the shape of the result
/// are the client's business.
pub trait DeliveryClient {
    type Output;

    fn fetch(&self, resource: &str, id: &str) -> Self::Output;
}
