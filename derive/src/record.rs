use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, LitStr, PathArguments, Result, Type,
    ext::IdentExt, spanned::Spanned,
};

pub(crate) fn expand_record(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`Record` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`Record` may only be derived on structs with named fields.",
        ))?
    };

    let columns = fields
        .named
        .iter()
        .map(ColumnMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields marked `#[column(skip)]`.
        .collect::<Result<Vec<_>>>()?;

    let descriptors = columns.iter().map(|column| {
        let label = &column.label;
        let kind = column.kind.path();
        quote! {
            ::fitbod_csv::shape::FieldDescriptor {
                name: #label,
                kind: #kind,
            }
        }
    });

    let set_text = setter(
        &columns,
        &ColumnKind::Text,
        quote! { set_text },
        quote! { ::std::string::String },
    );
    let set_boolean = setter(
        &columns,
        &ColumnKind::Boolean,
        quote! { set_boolean },
        quote! { bool },
    );
    let set_integer = setter(
        &columns,
        &ColumnKind::Integer,
        quote! { set_integer },
        quote! { i64 },
    );
    let set_decimal = setter(
        &columns,
        &ColumnKind::Decimal,
        quote! { set_decimal },
        quote! { f64 },
    );

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::fitbod_csv::record::Record for #name #ty_generics #where_clause {
            const SHAPE: ::fitbod_csv::shape::Shape =
                ::fitbod_csv::shape::Shape::new(&[#(#descriptors),*]);

            #set_text
            #set_boolean
            #set_integer
            #set_decimal
        }
    };

    Ok(expanded.into())
}

/// Emit a setter method dispatching on shape position, or nothing if no
/// column has the given kind.
fn setter(
    columns: &[ColumnMetadata],
    kind: &ColumnKind,
    method: impl ToTokens,
    primitive: impl ToTokens,
) -> Option<impl ToTokens> {
    let cases = columns
        .iter()
        .enumerate()
        .filter(|(_, column)| &column.kind == kind)
        .map(|(index, column)| {
            let ident = &column.ident;
            quote! { #index => self.#ident = value, }
        })
        .collect::<Vec<_>>();

    if cases.is_empty() {
        return None;
    }

    Some(quote! {
        fn #method(&mut self, index: usize, value: #primitive) {
            match index {
                #(#cases)*
                _ => {}
            };
        }
    })
}

#[derive(Debug)]
struct ColumnMetadata {
    ident: Ident,
    label: LitStr,
    kind: ColumnKind,
}

#[derive(Debug, PartialEq)]
enum ColumnKind {
    Text,
    Boolean,
    Integer,
    Decimal,
    Unsupported(String),
}

impl ColumnMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let Some(ident) = field.ident.clone() else {
            Err(Error::new_spanned(field, "Field must be named."))?
        };

        let mut label = None;
        let mut skip = false;

        for attr in field.attrs.iter().filter(|a| a.path().is_ident("column")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    label = Some(meta.value()?.parse::<LitStr>()?);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error("Column attribute must be `name = \"...\"` or `skip`."))
                }
            })?;
        }

        if skip {
            return Ok(None);
        }

        let label =
            label.unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));
        let kind = ColumnKind::classify(&field.ty);

        Ok(Some(Self { ident, label, kind }))
    }
}

impl ColumnKind {
    fn classify(ty: &Type) -> Self {
        let unsupported = || {
            let mut name = ty.to_token_stream().to_string();
            name.retain(|c| !c.is_whitespace());
            Self::Unsupported(name)
        };

        let Type::Path(path) = ty else {
            return unsupported();
        };

        let Some(segment) = path.path.segments.last() else {
            return unsupported();
        };

        if path.qself.is_some() || !matches!(segment.arguments, PathArguments::None) {
            return unsupported();
        }

        match segment.ident.to_string().as_str() {
            "String" => Self::Text,
            "bool" => Self::Boolean,
            "i64" => Self::Integer,
            "f64" => Self::Decimal,
            _ => unsupported(),
        }
    }

    fn path(&self) -> impl ToTokens {
        match self {
            Self::Text => quote! { ::fitbod_csv::shape::FieldKind::Text },
            Self::Boolean => quote! { ::fitbod_csv::shape::FieldKind::Boolean },
            Self::Integer => quote! { ::fitbod_csv::shape::FieldKind::Integer },
            Self::Decimal => quote! { ::fitbod_csv::shape::FieldKind::Decimal },
            Self::Unsupported(name) => {
                quote! { ::fitbod_csv::shape::FieldKind::Unsupported(#name) }
            }
        }
    }
}
