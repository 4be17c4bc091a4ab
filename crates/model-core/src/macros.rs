/// Declares a resource type: its immutable value, its builder, list aliases
/// and typed JSON entry points.
///
/// Each field names its accessor, its kind and its JSON member name.
/// Kinds are `string`, `boolean`, `integer`, `float`, `strings` (list of
/// text), `object(Type)` (nested resource) and `list(Type)` (list of
/// resources). Presence bits follow declaration order.
///
/// `struct` declares a plain record; `class` declares an identifiable
/// resource that also carries `kind`, `id`, `href` and a link flag.
///
/// Accessors are inherent methods, so a field named `default` shadows
/// `T::default()`; write `<T as Default>::default()` for the empty value.
///
/// ```
/// use clustermgmt_model_core::resource;
///
/// resource! {
///     /// Processing quota.
///     pub struct Quota("Quota") {
///         /// Number of cores.
///         cores: integer = "cores",
///         labels: strings = "labels",
///     }
/// }
///
/// let quota = QuotaBuilder::new().cores(4).build().unwrap();
/// assert_eq!(quota.cores(), 4);
/// assert_eq!(quota.get_labels(), None);
/// assert_eq!(marshal_quota_to_string(&quota), r#"{"cores":4}"#);
/// ```
///
/// For `pub struct Quota` the macro emits `Quota`, `QuotaBuilder`,
/// `QuotaList`, `QuotaListBuilder` and the functions `marshal_quota`,
/// `marshal_quota_to_string`, `unmarshal_quota`, `marshal_quota_list` and
/// `unmarshal_quota_list`.
#[macro_export]
macro_rules! resource {
    (@define $class:ident $(#[$meta:meta])* $vis:vis $name:ident $kind:literal {
        $( $(#[$fmeta:meta])* $field:ident : $fkind:ident [$($inner:ty)?] = $json:literal ),*
    }) => { $crate::__private::paste! {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            fieldset: $crate::FieldSet,
            identity: $crate::resource!(@identity_ty $class),
            $( $field: $crate::resource!(@value_ty $fkind [$($inner)?]), )*
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        $vis struct [<$name Builder>] {
            fieldset: $crate::FieldSet,
            identity: $crate::resource!(@identity_ty $class),
            $( $field: $crate::resource!(@builder_ty $fkind [$($inner)?]), )*
        }

        #[doc = concat!("List of [`", stringify!($name), "`] values.")]
        $vis type [<$name List>] = $crate::List<$name>;

        #[doc = concat!("Builder for [`", stringify!($name), "List`].")]
        $vis type [<$name ListBuilder>] = $crate::ListBuilder<[<$name Builder>]>;

        #[allow(dead_code)]
        impl $name {
            const FIELD_NAMES: &'static [&'static str] = &[$($json),*];
            $(
                const [<BIT_ $field:upper>]: u32 = $crate::field_bit(
                    Self::FIELD_NAMES,
                    $json,
                    <$crate::resource!(@identity_ty $class) as $crate::__private::IdentitySlot>::OFFSET,
                );
            )*
        }

        impl $name {
            pub fn builder() -> [<$name Builder>] {
                <[<$name Builder>] as ::std::default::Default>::default()
            }

            /// Presence bits of this value.
            pub fn fields(&self) -> $crate::FieldSet {
                self.fieldset
            }

            /// `true` when no declared field is present.
            pub fn is_empty(&self) -> bool {
                <$crate::resource!(@identity_ty $class) as $crate::__private::IdentitySlot>::is_empty(self.fieldset)
            }

            $crate::resource!(@value_identity $class);

            $(
                $crate::resource!(@getters $fkind [$($inner)?] $field [<get_ $field>] [<BIT_ $field:upper>] $json $(#[$fmeta])*);
            )*
        }

        impl [<$name Builder>] {
            pub fn new() -> Self {
                <Self as ::std::default::Default>::default()
            }

            /// Presence bits set so far.
            pub fn fields(&self) -> $crate::FieldSet {
                self.fieldset
            }

            pub fn is_empty(&self) -> bool {
                <$crate::resource!(@identity_ty $class) as $crate::__private::IdentitySlot>::is_empty(self.fieldset)
            }

            $crate::resource!(@builder_identity $class);

            $(
                $crate::resource!(@setter $fkind [$($inner)?] $name $field [<BIT_ $field:upper>] $(#[$fmeta])*);
            )*

            /// Replaces the whole builder state with a deep copy of `value`.
            /// `None` leaves the builder untouched.
            #[must_use]
            pub fn copy(mut self, value: Option<&$name>) -> Self {
                let Some(value) = value else {
                    return self;
                };
                self.fieldset = value.fieldset;
                self.identity.clone_from(&value.identity);
                $( self.$field = $crate::resource!(@copy_field $fkind [$($inner)?] value.$field); )*
                self
            }

            /// Builds a value from the current state. The builder is left
            /// unchanged; a failing nested builder fails the whole build.
            pub fn build(&self) -> Result<$name, $crate::BuildError> {
                Ok($name {
                    fieldset: self.fieldset,
                    identity: self.identity.clone(),
                    $( $field: $crate::resource!(@build_field $fkind [$($inner)?] self.$field), )*
                })
            }
        }

        impl $crate::Build for [<$name Builder>] {
            type Target = $name;

            fn build(&self) -> Result<$name, $crate::BuildError> {
                [<$name Builder>]::build(self)
            }

            fn copy(self, value: Option<&$name>) -> Self {
                [<$name Builder>]::copy(self, value)
            }
        }

        impl $crate::Binding for $name {
            type Builder = [<$name Builder>];

            fn write_json(&self, writer: &mut $crate::__private::JsonWriter) {
                writer.write_start_obj();
                $crate::__private::IdentitySlot::write_members(
                    &self.identity,
                    self.fieldset,
                    &<Self as $crate::Resource>::KINDS,
                    writer,
                );
                $(
                    if self.fieldset.contains(Self::[<BIT_ $field:upper>]) {
                        $crate::resource!(@write_field $fkind [$($inner)?] writer $json self.$field);
                    }
                )*
                writer.write_end_obj();
            }

            fn read_json(
                reader: &mut $crate::__private::JsonReader<'_>,
            ) -> Result<Self, $crate::__private::JsonError> {
                let mut value = <$name as ::std::default::Default>::default();
                reader.read_object(|reader, key| {
                    if $crate::__private::IdentitySlot::read_member(
                        &mut value.identity,
                        &mut value.fieldset,
                        &<Self as $crate::Resource>::KINDS,
                        reader,
                        &key,
                    )? {
                        return Ok(());
                    }
                    match key.as_str() {
                        $(
                            $json => {
                                $crate::resource!(@read_field $fkind [$($inner)?] reader value $field);
                                value.fieldset = value.fieldset.with(Self::[<BIT_ $field:upper>]);
                            }
                        )*
                        _ => $crate::__private::skip_unknown(reader, $kind, &key)?,
                    }
                    Ok(())
                })?;
                Ok(value)
            }
        }

        impl $crate::Resource for $name {
            const KINDS: $crate::Kinds = $crate::kinds!($kind);
            const CLASS: $crate::ResourceClass =
                <$crate::resource!(@identity_ty $class) as $crate::__private::IdentitySlot>::CLASS;

            fn fields(&self) -> $crate::FieldSet {
                self.fieldset
            }

            fn is_empty(&self) -> bool {
                $name::is_empty(self)
            }
        }

        $crate::resource!(@identifiable $class $name);

        #[doc = concat!("Writes a [`", stringify!($name), "`] as JSON to `sink`.")]
        $vis fn [<marshal_ $name:snake>]<W: ::std::io::Write>(
            value: &$name,
            sink: W,
        ) -> Result<(), $crate::__private::JsonError> {
            $crate::marshal(value, sink)
        }

        #[doc = concat!("Encodes a [`", stringify!($name), "`] as a JSON string.")]
        $vis fn [<marshal_ $name:snake _to_string>](value: &$name) -> ::std::string::String {
            $crate::marshal_to_string(value)
        }

        #[doc = concat!("Reads a [`", stringify!($name), "`] from JSON.")]
        $vis fn [<unmarshal_ $name:snake>]<'a>(
            source: impl Into<$crate::__private::Source<'a>>,
        ) -> Result<$name, $crate::__private::JsonError> {
            $crate::unmarshal(source)
        }

        #[doc = concat!("Writes [`", stringify!($name), "`] values as a bare JSON array.")]
        $vis fn [<marshal_ $name:snake _list>]<W: ::std::io::Write>(
            values: &[$name],
            sink: W,
        ) -> Result<(), $crate::__private::JsonError> {
            $crate::marshal_list(values, sink)
        }

        #[doc = concat!("Reads a bare JSON array of [`", stringify!($name), "`] values.")]
        $vis fn [<unmarshal_ $name:snake _list>]<'a>(
            source: impl Into<$crate::__private::Source<'a>>,
        ) -> Result<::std::vec::Vec<$name>, $crate::__private::JsonError> {
            $crate::unmarshal_list(source)
        }
    }};

    (@identity_ty plain) => { () };
    (@identity_ty class) => { $crate::__private::Identity };

    (@value_ty $fkind:ident []) => { $crate::resource!(@scalar_ty $fkind) };
    (@value_ty $fkind:ident [$inner:ty]) => {
        ::std::option::Option<::std::boxed::Box<$crate::resource!(@binding_ty $fkind $inner)>>
    };

    (@builder_ty $fkind:ident []) => { $crate::resource!(@scalar_ty $fkind) };
    (@builder_ty $fkind:ident [$inner:ty]) => {
        ::std::option::Option<::std::boxed::Box<
            <$crate::resource!(@binding_ty $fkind $inner) as $crate::Binding>::Builder
        >>
    };

    (@scalar_ty string) => { ::std::string::String };
    (@scalar_ty boolean) => { bool };
    (@scalar_ty integer) => { i64 };
    (@scalar_ty float) => { f64 };
    (@scalar_ty strings) => { ::std::vec::Vec<::std::string::String> };

    (@binding_ty object $inner:ty) => { $inner };
    (@binding_ty list $inner:ty) => { $crate::List<$inner> };

    (@value_identity plain) => {};
    (@value_identity class) => {
        /// `true` when this value only links to an object held elsewhere.
        pub fn link(&self) -> bool {
            <Self as $crate::Identifiable>::link(self)
        }

        pub fn kind(&self) -> &'static str {
            <Self as $crate::Identifiable>::kind(self)
        }

        pub fn id(&self) -> &str {
            <Self as $crate::Identifiable>::id(self)
        }

        pub fn get_id(&self) -> Option<&str> {
            <Self as $crate::Identifiable>::get_id(self)
        }

        pub fn href(&self) -> &str {
            <Self as $crate::Identifiable>::href(self)
        }

        pub fn get_href(&self) -> Option<&str> {
            <Self as $crate::Identifiable>::get_href(self)
        }
    };

    (@builder_identity plain) => {};
    (@builder_identity class) => {
        pub fn link(mut self, value: bool) -> Self {
            self.fieldset = self.fieldset.set($crate::LINK_BIT, value);
            self
        }

        pub fn id(mut self, value: impl Into<::std::string::String>) -> Self {
            self.identity.id = value.into();
            self.fieldset = self.fieldset.with($crate::ID_BIT);
            self
        }

        pub fn href(mut self, value: impl Into<::std::string::String>) -> Self {
            self.identity.href = value.into();
            self.fieldset = self.fieldset.with($crate::HREF_BIT);
            self
        }
    };

    (@identifiable plain $name:ident) => {};
    (@identifiable class $name:ident) => {
        impl $crate::Identifiable for $name {
            fn get_id(&self) -> Option<&str> {
                self.fieldset
                    .contains($crate::ID_BIT)
                    .then_some(self.identity.id.as_str())
            }

            fn get_href(&self) -> Option<&str> {
                self.fieldset
                    .contains($crate::HREF_BIT)
                    .then_some(self.identity.href.as_str())
            }
        }
    };

    (@getters $fkind:ident [] $field:ident $get:ident $bit:ident $json:literal $(#[$fmeta:meta])*) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> $crate::ScalarRef<'_, $crate::resource!(@scalar_ty $fkind)> {
            if self.fieldset.contains(Self::$bit) {
                $crate::Scalar::view(&self.$field)
            } else {
                <$crate::resource!(@scalar_ty $fkind) as $crate::Scalar>::zero()
            }
        }

        #[doc = concat!("Value of `", $json, "`, or `None` when it is absent.")]
        pub fn $get(&self) -> Option<$crate::ScalarRef<'_, $crate::resource!(@scalar_ty $fkind)>> {
            if self.fieldset.contains(Self::$bit) {
                Some($crate::Scalar::view(&self.$field))
            } else {
                None
            }
        }
    };
    (@getters $fkind:ident [$inner:ty] $field:ident $get:ident $bit:ident $json:literal $(#[$fmeta:meta])*) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> Option<&$crate::resource!(@binding_ty $fkind $inner)> {
            self.$get()
        }

        #[doc = concat!("Value of `", $json, "`, or `None` when it is absent.")]
        pub fn $get(&self) -> Option<&$crate::resource!(@binding_ty $fkind $inner)> {
            if self.fieldset.contains(Self::$bit) {
                self.$field.as_deref()
            } else {
                None
            }
        }
    };

    (@setter $fkind:ident [] $name:ident $field:ident $bit:ident $(#[$fmeta:meta])*) => {
        $(#[$fmeta])*
        pub fn $field(mut self, value: impl Into<$crate::resource!(@scalar_ty $fkind)>) -> Self {
            self.$field = value.into();
            self.fieldset = self.fieldset.with($name::$bit);
            self
        }
    };
    (@setter $fkind:ident [$inner:ty] $name:ident $field:ident $bit:ident $(#[$fmeta:meta])*) => {
        $(#[$fmeta])*
        ///
        /// Passing `None` clears the field.
        pub fn $field(
            mut self,
            value: impl Into<Option<<$crate::resource!(@binding_ty $fkind $inner) as $crate::Binding>::Builder>>,
        ) -> Self {
            let value = value.into();
            self.fieldset = self.fieldset.set($name::$bit, value.is_some());
            self.$field = value.map(::std::boxed::Box::new);
            self
        }
    };

    (@copy_field $fkind:ident [] $src:expr) => {
        ::std::clone::Clone::clone(&$src)
    };
    (@copy_field $fkind:ident [$inner:ty] $src:expr) => {
        $src.as_deref()
            .map(|value| ::std::boxed::Box::new($crate::Binding::to_builder(value)))
    };

    (@build_field $fkind:ident [] $src:expr) => {
        ::std::clone::Clone::clone(&$src)
    };
    (@build_field $fkind:ident [$inner:ty] $src:expr) => {
        match $src.as_deref() {
            Some(builder) => Some(::std::boxed::Box::new($crate::Build::build(builder)?)),
            None => None,
        }
    };

    (@write_field $fkind:ident [] $writer:ident $json:literal $src:expr) => {
        $writer.write_key($json);
        $crate::Scalar::write_json(&$src, $writer);
    };
    (@write_field $fkind:ident [$inner:ty] $writer:ident $json:literal $src:expr) => {
        if let Some(value) = $src.as_deref() {
            $writer.write_key($json);
            $crate::Binding::write_json(value, $writer);
        }
    };

    (@read_field $fkind:ident [] $reader:ident $value:ident $field:ident) => {
        $value.$field = $crate::Scalar::read_json($reader)?
    };
    (@read_field $fkind:ident [$inner:ty] $reader:ident $value:ident $field:ident) => {
        $value.$field = Some(::std::boxed::Box::new($crate::Binding::read_json($reader)?))
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($kind:literal) {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $fkind:ident $(($inner:ty))? = $json:literal
            ),* $(,)?
        }
    ) => {
        $crate::resource!(@define plain $(#[$meta])* $vis $name $kind {
            $( $(#[$fmeta])* $field : $fkind [$($inner)?] = $json ),*
        });
    };
    (
        $(#[$meta:meta])*
        $vis:vis class $name:ident ($kind:literal) {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $fkind:ident $(($inner:ty))? = $json:literal
            ),* $(,)?
        }
    ) => {
        $crate::resource!(@define class $(#[$meta])* $vis $name $kind {
            $( $(#[$fmeta])* $field : $fkind [$($inner)?] = $json ),*
        });
    };
}
