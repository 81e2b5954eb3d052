//! Static Arabic/English string table.

use crate::state::theme::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    // Store notifications
    LoadFailed,
    Saved,
    SaveFailed,
    Deleted,
    DeleteFailed,
    OrderPlaced,
    OrderFailed,
    BackupRestored,
    // Landing page
    BrowseServices,
    PaymentMethods,
    OrderNow,
    CustomerName,
    ServiceLabel,
    Notes,
    Submit,
    Retry,
    Loading,
    Testimonials,
    // Admin
    AdminPanel,
    Login,
    Password,
    Logout,
    Dashboard,
    Services,
    Payments,
    Orders,
    Settings,
    Customizer,
    Backup,
    Add,
    Save,
    Delete,
    Archive,
    Unarchive,
    Name,
    Price,
    Rank,
    Active,
    Details,
    Title,
    Description,
    OrderNotice,
    ExportCsv,
    ExportBackup,
    ImportBackup,
    TotalServices,
    ActiveServices,
    TotalOrders,
    NewOrders,
    ChangePassword,
    ResetDefaults,
}

/// Translate a key. Arabic first: it is the primary audience.
pub fn t(lang: Language, key: Key) -> &'static str {
    let (ar, en) = pair(key);
    match lang {
        Language::Ar => ar,
        Language::En => en,
    }
}

fn pair(key: Key) -> (&'static str, &'static str) {
    match key {
        Key::LoadFailed => (
            "تعذر تحميل البيانات، يتم عرض نسخة محلية",
            "Failed to load data; showing a local copy",
        ),
        Key::Saved => ("تم الحفظ بنجاح", "Saved"),
        Key::SaveFailed => ("فشل الحفظ", "Save failed"),
        Key::Deleted => ("تم الحذف", "Deleted"),
        Key::DeleteFailed => ("فشل الحذف", "Delete failed"),
        Key::OrderPlaced => ("تم استلام طلبك بنجاح", "Your order has been received"),
        Key::OrderFailed => ("تعذر إرسال الطلب", "Could not submit the order"),
        Key::BackupRestored => ("تمت استعادة النسخة الاحتياطية", "Backup restored"),
        Key::BrowseServices => ("خدماتنا", "Our services"),
        Key::PaymentMethods => ("طرق الدفع", "Payment methods"),
        Key::OrderNow => ("اطلب الآن", "Order now"),
        Key::CustomerName => ("الاسم", "Your name"),
        Key::ServiceLabel => ("الخدمة", "Service"),
        Key::Notes => ("ملاحظات", "Notes"),
        Key::Submit => ("إرسال الطلب", "Submit order"),
        Key::Retry => ("إعادة المحاولة", "Retry"),
        Key::Loading => ("جاري التحميل...", "Loading..."),
        Key::Testimonials => ("آراء العملاء", "Testimonials"),
        Key::AdminPanel => ("لوحة التحكم", "Admin panel"),
        Key::Login => ("تسجيل الدخول", "Log in"),
        Key::Password => ("كلمة المرور", "Password"),
        Key::Logout => ("خروج", "Log out"),
        Key::Dashboard => ("الرئيسية", "Dashboard"),
        Key::Services => ("الخدمات", "Services"),
        Key::Payments => ("طرق الدفع", "Payments"),
        Key::Orders => ("الطلبات", "Orders"),
        Key::Settings => ("إعدادات الموقع", "Site settings"),
        Key::Customizer => ("تخصيص الصفحة", "Customizer"),
        Key::Backup => ("نسخ احتياطي", "Backup"),
        Key::Add => ("إضافة", "Add"),
        Key::Save => ("حفظ", "Save"),
        Key::Delete => ("حذف", "Delete"),
        Key::Archive => ("أرشفة", "Archive"),
        Key::Unarchive => ("إلغاء الأرشفة", "Unarchive"),
        Key::Name => ("الاسم", "Name"),
        Key::Price => ("السعر", "Price"),
        Key::Rank => ("الترتيب", "Rank"),
        Key::Active => ("مفعل", "Active"),
        Key::Details => ("التفاصيل", "Details"),
        Key::Title => ("العنوان", "Title"),
        Key::Description => ("الوصف", "Description"),
        Key::OrderNotice => ("رسالة ما بعد الطلب", "Post-order notice"),
        Key::ExportCsv => ("تصدير CSV", "Export CSV"),
        Key::ExportBackup => ("تنزيل نسخة احتياطية", "Download backup"),
        Key::ImportBackup => ("استعادة نسخة احتياطية", "Restore backup"),
        Key::TotalServices => ("إجمالي الخدمات", "Total services"),
        Key::ActiveServices => ("خدمات مفعلة", "Active services"),
        Key::TotalOrders => ("إجمالي الطلبات", "Total orders"),
        Key::NewOrders => ("طلبات جديدة", "New orders"),
        Key::ChangePassword => ("تغيير كلمة المرور", "Change password"),
        Key::ResetDefaults => ("استعادة الافتراضي", "Reset to defaults"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_resolve() {
        assert_eq!(t(Language::En, Key::Saved), "Saved");
        assert_eq!(t(Language::Ar, Key::Saved), "تم الحفظ بنجاح");
    }
}
