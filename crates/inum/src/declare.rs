//! The `declare_inum!` declaration macro.
//!
//! Expands a declaration block into a unit struct, an [`Inum`] impl whose
//! registry is built once inside a `LazyLock` static, and one read-only
//! named accessor per label. This is the whole definition surface for
//! macro-declared types: the builder is consumed inside the initializer,
//! so no runtime redefinition path exists.
//!
//! [`Inum`]: crate::Inum

/// Declares a concrete enum type.
///
/// Members without `= value` get the autoincremented value (the member
/// count so far); explicit and implicit values can be mixed, subject to
/// the collision rules of [`RegistryBuilder::define`]. A bad declaration
/// (invalid label, duplicate label or value) panics with the definition
/// error on first use of the type — the declaration site is the only
/// place that can fix it.
///
/// ```
/// inum::declare_inum! {
///     /// Anime titles of a certain season.
///     pub enum Anime {
///         NYARUKO,
///         MUROMISAN,
///         NOURIN,
///         KMB = 4,
///     }
/// }
///
/// use inum::Inum;
///
/// assert_eq!(Anime::NOURIN().value(), 2);
/// assert_eq!(Anime::parse("kmb"), Some(Anime::KMB()));
/// ```
///
/// [`RegistryBuilder::define`]: crate::RegistryBuilder::define
#[macro_export]
macro_rules! declare_inum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$label_meta:meta])* $label:ident $(= $value:expr)? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis struct $name;

        impl $crate::Inum for $name {
            fn registry() -> &'static $crate::Registry {
                static REGISTRY: ::std::sync::LazyLock<$crate::Registry> =
                    ::std::sync::LazyLock::new(|| {
                        let mut builder = $crate::Registry::builder(::std::stringify!($name));
                        $( $crate::declare_inum!(@define $name, builder, $label $(, $value)?); )+
                        builder.finish()
                    });
                &REGISTRY
            }
        }

        impl $name {
            $(
                $(#[$label_meta])*
                #[doc = ::std::concat!(
                    "Returns the `", ::std::stringify!($label), "` member singleton."
                )]
                #[allow(non_snake_case)]
                #[must_use]
                $vis fn $label() -> &'static $crate::Member {
                    <$name as $crate::Inum>::registry()
                        .find_label(::std::stringify!($label))
                        .expect("declared member is always registered")
                }
            )+
        }
    };

    // Internal: one define call per declared label.
    (@define $name:ident, $builder:ident, $label:ident) => {
        if let Err(err) = $builder.define(::std::stringify!($label)) {
            ::std::panic!("{}: {err}", ::std::stringify!($name));
        }
    };
    (@define $name:ident, $builder:ident, $label:ident, $value:expr) => {
        if let Err(err) = $builder.define_with(::std::stringify!($label), $value) {
            ::std::panic!("{}: {err}", ::std::stringify!($name));
        }
    };
}
