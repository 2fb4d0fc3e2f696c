/// Extends string types with useful functions
pub trait StringExt {
    /// Capilalises the first letter in a string
    ///
    /// Mostly used to normalise element symbols given in any case.
    ///
    /// ```rust
    /// # use ftools_utils::StringExt;
    /// assert_eq!("fe".capitalise(), "Fe".to_string());
    /// assert_eq!("test string".capitalise(), "Test string".to_string());
    /// ```
    fn capitalise(&self) -> String;

    /// Normalise a chemical symbol, e.g. `"FE"`, `"fe"` => `"Fe"`
    ///
    /// ```rust
    /// # use ftools_utils::StringExt;
    /// assert_eq!("HE".to_symbol(), "He".to_string());
    /// assert_eq!(" pb ".to_symbol(), "Pb".to_string());
    /// ```
    fn to_symbol(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    }

    fn to_symbol(&self) -> String {
        self.as_ref().trim().to_lowercase().capitalise()
    }
}
