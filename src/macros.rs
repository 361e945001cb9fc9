//! Internal macros

/// Declare the zero-sized transformer and the `transform_*_response` entry point for an
/// entity whose wire record converts into its domain record with a plain `From` impl.
macro_rules! record_transformer {
    (
        $(#[$meta:meta])*
        $transformer:ident, $entity:literal, $wire:ty => $domain:ty, $func:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $transformer;

        impl $crate::transformers::ResponseTransformer for $transformer {
            type Output = $domain;

            fn entity(&self) -> &'static str {
                $entity
            }

            fn transform(
                &self,
                raw: &$crate::types::RawRecord,
            ) -> $crate::error::Result<$domain> {
                $crate::transformers::transform_record::<$wire, $domain>($entity, raw)
            }
        }

        #[doc = concat!(
            "Transform a raw `", $entity, "` record into [`", stringify!($domain), "`]."
        )]
        pub fn $func(raw: &$crate::types::RawRecord) -> $crate::error::Result<$domain> {
            use $crate::transformers::ResponseTransformer as _;
            $transformer.transform(raw)
        }
    };
}

pub(crate) use record_transformer;
