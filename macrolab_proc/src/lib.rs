//! Procedural counterparts of the declarative macros in `macrolab`.
extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{
	format_ident,
	quote,
	ToTokens,
};

use syn::{
	parse::{
		Parse,
		ParseStream,
		Result,
	},
	punctuated::Punctuated,
	parse_macro_input,
	Ident,
	Type,
	Token,
};

/// One `prefix: Type` entry.
struct SortDecl {
	prefix: Ident,
	ty: Type,
}

impl Parse for SortDecl {
	fn parse(input: ParseStream) -> Result<Self> {
		let prefix: Ident = input.parse()?;
		input.parse::<Token![:]>()?;
		let ty: Type = input.parse()?;
		Ok(Self { prefix, ty })
	}
}

struct SortDecls {
	decls: Punctuated<SortDecl, Token![,]>,
}

impl Parse for SortDecls {
	fn parse(input: ParseStream) -> Result<Self> {
		Ok(Self {
			decls: Punctuated::parse_terminated(input)?,
		})
	}
}

impl SortDecl {
	fn expand(&self) -> TokenStream2 {
		let SortDecl { prefix, ty } = self;
		let compare = format_ident!("{}_compare", prefix);
		let sort = format_ident!("{}_sort", prefix);
		let type_name = ty.to_token_stream().to_string();
		let compare_doc = format!("Three-way comparison of two `{type_name}` values.");
		let sort_doc = format!("Sorts a slice of `{type_name}` in non-decreasing order.");
		quote! {
			#[doc = #compare_doc]
			pub fn #compare(a: &#ty, b: &#ty) -> ::core::cmp::Ordering {
				if *a < *b {
					::core::cmp::Ordering::Less
				} else if *b < *a {
					::core::cmp::Ordering::Greater
				} else {
					::core::cmp::Ordering::Equal
				}
			}

			#[doc = #sort_doc]
			pub fn #sort(slice: &mut [#ty]) {
				slice.sort_unstable_by(#compare);
			}
		}
	}
}

/// Generates a `<prefix>_compare` and `<prefix>_sort` pair for every entry.
/// ```rs
/// declare_sorts!(int: i32, double: f64);
/// let mut a = [3, 2, 1];
/// int_sort(&mut a);
/// ```
/// The identifiers are built with `format_ident!`, which is the procedural
/// version of `paste!`'s `[<prefix _sort>]`.
#[proc_macro]
pub fn declare_sorts(input: TokenStream) -> TokenStream {
	let SortDecls { decls } = parse_macro_input!(input as SortDecls);
	let items = decls.iter().map(SortDecl::expand);
	quote! {
		#(#items)*
	}.into()
}
