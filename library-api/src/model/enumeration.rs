/// Declares a closed catalog vocabulary.
///
/// Each member maps to its upper-case name. The generated type gets a
/// case-insensitive `parse`, a capitalized `format` and `Display` / `FromStr`
/// implementations delegating to them.
macro_rules! impl_catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:expr) {
            $( $(#[$variant_meta:meta])* $variant:ident => $member:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )*
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &[Self] = &[ $( Self::$variant, )* ];

            /// Upper-case member name.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $member, )*
                }
            }

            /// Parses a member name, ignoring case.
            ///
            /// # Errors
            ///
            /// Returns [`CatalogError::UnknownValue`] if no member matches.
            pub fn parse(text: &str) -> CatalogResult<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.name().eq_ignore_ascii_case(text))
                    .ok_or_else(|| CatalogError::UnknownValue {
                        kind: $kind,
                        value: text.to_string(),
                    })
            }

            /// Display form: first letter upper-case, the rest lower-case.
            pub fn format(self) -> String {
                let mut chars = self.name().chars();
                let mut formatted = String::with_capacity(self.name().len());
                if let Some(first) = chars.next() {
                    formatted.extend(first.to_uppercase());
                }
                formatted.extend(chars.flat_map(char::to_lowercase));
                formatted
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.format())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}
