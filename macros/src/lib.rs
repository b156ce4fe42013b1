use proc_macro::TokenStream;
use quote::quote;

/// Generate a color model with exactly three named components.
///
/// The fields are made public, the usual value derives are added and the
/// model gains `new`, `to_components` and conversions to and from
/// `crate::color::Components`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not have generic parameters.");
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    if field_names.len() != 3 {
        return quote! {
            compile_error!("Model components must be named fields.");
        }
        .into();
    }

    let first = &field_names[0];
    let second = &field_names[1];
    let third = &field_names[2];

    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let model = &input.ident;

    let model_impl = quote! {
        impl #model {
            /// Create a new model from its three components.
            pub fn new(
                #first: crate::color::Component,
                #second: crate::color::Component,
                #third: crate::color::Component,
            ) -> Self {
                Self {
                    #first,
                    #second,
                    #third,
                }
            }

            /// Return the components of this model in declaration order.
            pub fn to_components(self) -> crate::color::Components {
                crate::color::Components(self.#first, self.#second, self.#third)
            }
        }

        impl From<crate::color::Components> for #model {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#model> for crate::color::Components {
            fn from(value: #model) -> Self {
                value.to_components()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
