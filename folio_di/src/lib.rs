pub use folio_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

/// A source of service instances.
///
/// Providers own externally constructed resources (and configuration) and a
/// cache of services built on top of them. Use the [`provider!`] macro to
/// define one.
pub trait Provider: Sized {
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provides: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provides for P {}
