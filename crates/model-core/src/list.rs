//! Ordered collections of resources.

use std::slice;

use clustermgmt_json::{JsonError, JsonReader, JsonWriter, Token};

use crate::binding::skip_unknown;
use crate::{Binding, Build, BuildError, Resource, ResourceClass};

/// Immutable, ordered collection of values.
///
/// Besides its items a list carries the `href` it was fetched from and a
/// link flag. Both are only ever set by [`ListBuilder`] or when the list is
/// read from JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct List<T> {
    link: bool,
    href: String,
    items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List {
            link: false,
            href: String::new(),
            items: Vec::new(),
        }
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when the list only links to a collection held elsewhere.
    pub fn link(&self) -> bool {
        self.link
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn get_href(&self) -> Option<&str> {
        (!self.href.is_empty()).then_some(self.href.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, or `None` when the index is negative or out of
    /// range.
    ///
    /// ```
    /// use clustermgmt_model_core::List;
    ///
    /// let list: List<i64> = vec![7].into();
    /// assert_eq!(list.get(0), Some(&7));
    /// assert_eq!(list.get(-1), None);
    /// assert_eq!(list.get(1u64), None);
    /// ```
    pub fn get<I: TryInto<usize>>(&self, index: I) -> Option<&T> {
        let index = index.try_into().ok()?;
        self.items.get(index)
    }

    /// Borrowed view of the items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Fresh copy of the items; changing it does not affect the list.
    pub fn slice(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Calls `f` on each item in order until it returns `false`.
    pub fn each<F: FnMut(&T) -> bool>(&self, mut f: F) {
        for item in &self.items {
            if !f(item) {
                break;
            }
        }
    }

    /// Calls `f` with each index and item in order until it returns `false`.
    pub fn range<F: FnMut(usize, &T) -> bool>(&self, mut f: F) {
        for (index, item) in self.items.iter().enumerate() {
            if !f(index, item) {
                break;
            }
        }
    }
}

impl<T: Resource> List<T> {
    /// `<Type>ListLink` when the list is a link, `<Type>List` otherwise.
    pub fn kind(&self) -> &'static str {
        if self.link {
            T::KINDS.list_link
        } else {
            T::KINDS.list
        }
    }

    /// Kind of a possibly missing list: `<Type>ListNil` for `None`.
    pub fn kind_of(list: Option<&Self>) -> &'static str {
        list.map_or(T::KINDS.list_nil, List::kind)
    }

    // Envelope form keeps the link flag and href, which a bare array cannot
    // carry.
    fn wants_envelope(&self) -> bool {
        T::CLASS == ResourceClass::Class || self.link || !self.href.is_empty()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        List {
            items,
            ..List::default()
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T> AsRef<[T]> for List<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

pub(crate) fn write_items<T: Binding>(writer: &mut JsonWriter, items: &[T]) {
    writer.write_start_arr();
    for item in items {
        item.write_json(writer);
    }
    writer.write_end_arr();
}

pub(crate) fn read_items<T: Binding>(reader: &mut JsonReader<'_>) -> Result<Vec<T>, JsonError> {
    let mut items = Vec::new();
    reader.read_array(|reader| {
        items.push(T::read_json(reader)?);
        Ok(())
    })?;
    Ok(items)
}

impl<T: Resource> Binding for List<T> {
    type Builder = ListBuilder<T::Builder>;

    fn write_json(&self, writer: &mut JsonWriter) {
        if !self.wants_envelope() {
            write_items(writer, &self.items);
            return;
        }
        writer.write_start_obj();
        writer.write_key("kind");
        writer.write_str(self.kind());
        if !self.href.is_empty() {
            writer.write_key("href");
            writer.write_str(&self.href);
        }
        if !self.link || !self.items.is_empty() {
            writer.write_key("items");
            write_items(writer, &self.items);
        }
        writer.write_end_obj();
    }

    /// Accepts both a bare array and a `{"kind", "href", "items"}`
    /// envelope. Only a `<Type>ListLink` kind is meaningful; any other kind
    /// value, `<Type>ListNil` included, reads as a regular list.
    fn read_json(reader: &mut JsonReader<'_>) -> Result<Self, JsonError> {
        let mut list = List::default();
        match reader.whats_next()? {
            Token::Array => list.items = read_items(reader)?,
            Token::Object => reader.read_object(|reader, key| {
                match key.as_str() {
                    "kind" => list.link = reader.read_str()? == T::KINDS.list_link,
                    "href" => list.href = reader.read_str()?,
                    "items" => list.items = read_items(reader)?,
                    _ => skip_unknown(reader, T::KINDS.list, &key)?,
                }
                Ok(())
            })?,
            _ => {
                return Err(JsonError::UnexpectedToken {
                    offset: reader.position(),
                    expected: "array or list object",
                })
            }
        }
        if list.link {
            tracing::debug!(kind = T::KINDS.list_link, href = %list.href, "read list link");
        }
        Ok(list)
    }
}

/// Mutable constructor for a [`List`], holding one builder per item.
#[derive(Debug, Clone)]
pub struct ListBuilder<B> {
    link: bool,
    href: String,
    items: Vec<B>,
}

impl<B> Default for ListBuilder<B> {
    fn default() -> Self {
        ListBuilder {
            link: false,
            href: String::new(),
            items: Vec::new(),
        }
    }
}

impl<B: Build> ListBuilder<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(mut self, value: bool) -> Self {
        self.link = value;
        self
    }

    pub fn href(mut self, value: impl Into<String>) -> Self {
        self.href = value.into();
        self
    }

    /// Replaces the item builders.
    pub fn items<I: IntoIterator<Item = B>>(mut self, items: I) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Appends one item builder.
    pub fn item(mut self, item: B) -> Self {
        self.items.push(item);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<B: Build> Build for ListBuilder<B> {
    type Target = List<B::Target>;

    fn build(&self) -> Result<List<B::Target>, BuildError> {
        Ok(List {
            link: self.link,
            href: self.href.clone(),
            items: self.items.iter().map(Build::build).collect::<Result<_, _>>()?,
        })
    }

    fn copy(mut self, value: Option<&List<B::Target>>) -> Self {
        if let Some(list) = value {
            self.link = list.link;
            self.href.clone_from(&list.href);
            self.items = list
                .items
                .iter()
                .map(|item| B::default().copy(Some(item)))
                .collect();
        }
        self
    }
}
