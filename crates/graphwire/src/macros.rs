/// Field declaration table for a host type.
///
/// Expands each row into an explicit typed accessor pair and collects every
/// spec, in row order, into the type's `field_schema()`, so declaration
/// order is wire order. The row's getter name becomes the schema accessor
/// name. A malformed literal table (empty wire name, duplicate getter spelled
/// via an explicit accessor override) is a programming error and panics on
/// first use.
///
/// ```ignore
/// field_accessors! {
///     impl Device {
///         serial / set_serial: String => FieldSpec::new("device.serial");
///         port / set_port: i64 => FieldSpec::new("device.port").kind(ValueKind::Int);
///     }
/// }
/// ```
#[macro_export]
macro_rules! field_accessors {
    (
        impl $owner:ty {
            $(
                $(#[$meta:meta])*
                $get:ident / $set:ident : $ty:ty => $spec:expr;
            )*
        }
    ) => {
        impl $owner {
            /// Declared field table for this type, in wire order.
            pub fn field_schema() -> &'static $crate::schema::Schema {
                static SCHEMA: ::std::sync::LazyLock<$crate::schema::Schema> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::schema::Schema::compose(::std::vec![
                            $( ($spec).accessor(::std::stringify!($get)) ),*
                        ])
                        .expect("field declaration table must compose")
                    });

                &SCHEMA
            }

            $(
                $(#[$meta])*
                pub fn $get(&self) -> ::std::result::Result<::std::option::Option<$ty>, $crate::Error> {
                    Self::field_schema().get_as::<$ty>(self, ::std::stringify!($get))
                }

                pub fn $set(
                    &mut self,
                    value: ::std::option::Option<$ty>,
                ) -> ::std::result::Result<(), $crate::Error> {
                    Self::field_schema().set_to(self, ::std::stringify!($get), value)
                }
            )*
        }
    };
}
