pub mod chapters;
pub mod sequence;

pub use sequence::{Chapter, ChapterResult, ChapterSequence};

use crate::config::ApiConfig;

/// 所有章節，依原始範例的順序排好。
pub fn default_sequence(config: &ApiConfig) -> ChapterSequence {
    let mut sequence = ChapterSequence::new();
    sequence.add_chapter(Box::new(chapters::account_types::AccountTypesChapter));
    sequence.add_chapter(Box::new(chapters::customers::CustomersChapter));
    sequence.add_chapter(Box::new(chapters::products::ProductsChapter));
    sequence.add_chapter(Box::new(chapters::assets::AssetsChapter::new(
        config.asset_import_file().to_string(),
        config.asset_error_file().to_string(),
    )));
    sequence.add_chapter(Box::new(chapters::plans::PlansChapter));
    sequence.add_chapter(Box::new(chapters::discounts::DiscountsChapter));
    sequence.add_chapter(Box::new(chapters::order_config::OrderConfigChapter));
    sequence.add_chapter(Box::new(chapters::purchase_orders::PurchaseOrdersChapter));
    sequence.add_chapter(Box::new(chapters::invoices::InvoicesChapter));
    sequence.add_chapter(Box::new(chapters::payments::PaymentsChapter));
    sequence.add_chapter(Box::new(chapters::commissions::CommissionsChapter));
    sequence.add_chapter(Box::new(chapters::currencies::CurrenciesChapter));
    sequence.add_chapter(Box::new(chapters::meta_fields::MetaFieldsChapter));
    sequence.add_chapter(Box::new(chapters::plugins::PluginsChapter));
    sequence.add_chapter(Box::new(chapters::preferences::PreferencesChapter));
    sequence.add_chapter(Box::new(chapters::usage_pools::UsagePoolsChapter));

    sequence
}
