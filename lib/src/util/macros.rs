/// Builds an ordered set of [`Attributes`](crate::html::Attributes).
///
/// ```rust
/// use zebec::attrs;
///
/// let attributes = attrs! { "class" => "card", "id" => "first" };
/// assert_eq!(attributes.to_string(), " class='card' id='first'");
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! attrs {
    ($($key:expr => $value:expr),* $(,)?) => ({
        #[allow(unused_mut)]
        let mut attributes = $crate::html::Attributes::new();
        $(attributes.insert($key, $value);)*
        attributes
    });
}

pub use attrs;
