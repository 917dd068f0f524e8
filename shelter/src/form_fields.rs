/// Create an enum of focusable widgets that can be cycled with tab/shift-tab.
/// The first variant listed gets focus first.
#[macro_export]
macro_rules! form_fields {
    ($name:ident, $($variant:ident),*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            const ALL: &'static [$name] = &[
                $($name::$variant),*
            ];

            fn position(self) -> usize {
                Self::ALL
                    .iter()
                    .position(|field| *field == self)
                    .unwrap_or_default()
            }

            /// The widget that gets focus when the form opens
            pub fn first() -> Self {
                Self::ALL[0]
            }

            /// Move focus forward, wrapping around (e.g. with tab)
            pub fn next(self) -> Self {
                Self::ALL[(self.position() + 1) % Self::ALL.len()]
            }

            /// Move focus backward, wrapping around (e.g. with shift-tab)
            pub fn prev(self) -> Self {
                Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
            }
        }
    };
}
