use crate::form::ComplaintType;

/// All user-facing strings for one language.
#[derive(Debug, Clone)]
pub struct UiStrings {
    // ==================== Header ====================
    pub header_title: &'static str,

    /// Label of the language switch. Names the *other* language.
    pub language_switch: &'static str,

    // ==================== Hero ====================
    pub hero_badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,

    // ==================== Form ====================
    pub form_title: &'static str,
    pub form_description: &'static str,
    pub customer_name: &'static str,
    pub customer_name_placeholder: &'static str,
    pub complaint_type: &'static str,
    pub complaint_type_placeholder: &'static str,
    pub notes: &'static str,
    pub notes_placeholder: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub privacy_note: &'static str,

    // ==================== Complaint types ====================
    pub service_quality: &'static str,
    pub technical_issue: &'static str,
    pub billing_issue: &'static str,
    pub delay_issue: &'static str,
    pub other: &'static str,

    // ==================== Outcome ====================
    pub success_title: &'static str,
    pub success_message: &'static str,
    pub send_another: &'static str,

    /// Shown when a required field is missing.
    pub required: &'static str,

    /// Shown when the submission could not be delivered.
    pub error: &'static str,

    // ==================== Feature cards ====================
    pub quality_title: &'static str,
    pub quality_description: &'static str,
    pub security_title: &'static str,
    pub security_description: &'static str,
    pub support_title: &'static str,
    pub support_description: &'static str,

    // ==================== Footer ====================
    pub made_with: &'static str,
    pub footer_text: &'static str,
}

impl UiStrings {
    pub fn complaint_label(&self, kind: ComplaintType) -> &'static str {
        match kind {
            ComplaintType::ServiceQuality => self.service_quality,
            ComplaintType::TechnicalIssue => self.technical_issue,
            ComplaintType::BillingIssue => self.billing_issue,
            ComplaintType::DelayIssue => self.delay_issue,
            ComplaintType::Other => self.other,
        }
    }
}

// ==================== Arabic Strings ====================

pub const ARABIC_STRINGS: UiStrings = UiStrings {
    header_title: "خدمة العملاء",
    language_switch: "English",

    hero_badge: "نحن هنا لمساعدتك",
    title: "استبيان رضا العملاء",
    subtitle: "نحن نهتم برأيكم - ساعدونا في تحسين خدماتنا",

    form_title: "نموذج الشكاوى والملاحظات",
    form_description: "يرجى ملء النموذج أدناه وسنقوم بالرد عليك في أقرب وقت ممكن",
    customer_name: "اسم العميل",
    customer_name_placeholder: "أدخل اسمك الكريم",
    complaint_type: "نوع الشكوى",
    complaint_type_placeholder: "اختر نوع الشكوى",
    notes: "ملاحظات",
    notes_placeholder: "اكتب ملاحظاتك أو تفاصيل الشكوى هنا...",
    submit: "إرسال البيانات",
    submitting: "جاري الإرسال...",
    privacy_note: "بياناتك آمنة ومحمية",

    service_quality: "جودة الخدمة",
    technical_issue: "مشكلة تقنية",
    billing_issue: "مشكلة في الفواتير",
    delay_issue: "تأخر في الخدمة",
    other: "أخرى",

    success_title: "تم الإرسال بنجاح!",
    success_message: "شكراً لمشاركتك. تم إرسال بياناتك بنجاح وسنقوم بالتواصل معك قريباً.",
    send_another: "إرسال استبيان آخر",
    required: "هذا الحقل مطلوب",
    error: "حدث خطأ أثناء الإرسال. يرجى المحاولة مرة أخرى.",

    quality_title: "جودة عالية",
    quality_description: "نحن نسعى دائماً لتقديم أفضل الخدمات",
    security_title: "أمان البيانات",
    security_description: "بياناتك محمية ومشفرة بأعلى معايير الأمان",
    support_title: "دعم 24/7",
    support_description: "فريق الدعم جاهز لمساعدتك على مدار الساعة",

    made_with: "صنع بـ",
    footer_text: "© 2025 جميع الحقوق محفوظة",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: UiStrings = UiStrings {
    header_title: "Customer Service",
    language_switch: "العربية",

    hero_badge: "We are here to help",
    title: "Customer Satisfaction Survey",
    subtitle: "We value your feedback - Help us improve our services",

    form_title: "Complaints & Feedback Form",
    form_description: "Please fill out the form below and we will respond as soon as possible",
    customer_name: "Customer Name",
    customer_name_placeholder: "Enter your full name",
    complaint_type: "Complaint Type",
    complaint_type_placeholder: "Select complaint type",
    notes: "Notes",
    notes_placeholder: "Write your notes or complaint details here...",
    submit: "Submit Data",
    submitting: "Submitting...",
    privacy_note: "Your data is secure and protected",

    service_quality: "Service Quality",
    technical_issue: "Technical Issue",
    billing_issue: "Billing Issue",
    delay_issue: "Service Delay",
    other: "Other",

    success_title: "Submitted Successfully!",
    success_message: "Thank you for your feedback. Your data has been sent successfully and we will contact you soon.",
    send_another: "Submit Another Response",
    required: "This field is required",
    error: "An error occurred while submitting. Please try again.",

    quality_title: "High Quality",
    quality_description: "We always strive to provide the best services",
    security_title: "Data Security",
    security_description: "Your data is protected with highest security standards",
    support_title: "24/7 Support",
    support_description: "Support team ready to help you around the clock",

    made_with: "Made with",
    footer_text: "© 2025 All Rights Reserved",
};
