use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use log::error;

use crate::{CategoriesListener, Category};

/// A listener that prints the category tree, one category per line.
pub struct PrintingListener {
    writer: Arc<Mutex<dyn Write + Send>>,
}

impl PrintingListener {
    /// Creates a new `PrintingListener` writing to the standard output.
    pub fn stdout() -> Self {
        Self::new(Arc::new(Mutex::new(std::io::stdout())))
    }

    /// Creates a new `PrintingListener` writing to the given writer.
    pub fn new(writer: Arc<Mutex<dyn Write + Send>>) -> Self {
        Self { writer }
    }

    fn write_tree(
        writer: &mut dyn Write,
        categories: &[Category],
        depth: usize,
    ) -> std::io::Result<()> {
        for category in categories {
            writeln!(
                writer,
                "{}{}\t{}",
                "  ".repeat(depth),
                category.id(),
                category.name()
            )?;
            Self::write_tree(writer, category.children(), depth + 1)?;
        }

        Ok(())
    }
}

impl CategoriesListener for PrintingListener {
    fn on_categories_loaded(&self, categories: Vec<Category>) {
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = Self::write_tree(&mut *writer, &categories, 0) {
            error!("Failed to print categories: {e}");
        }
    }
}
