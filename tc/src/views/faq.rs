//! FAQ page: question index followed by the answers, grouped by block

use crate::engine::Renderer;
use crate::rows::Rows;
use crate::view::View;

pub struct FaqBody;

impl View for FaqBody {
    fn name(&self) -> &'static str {
        "faq_body"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.include("overall_header");
        r.write("<h2>");
        r.var("L_FAQ_TITLE");
        r.write("</h2>\n\n<div class=\"panel bg1\" id=\"faqlinks\">\n\t<div class=\"inner\">\n");

        for (block, group) in r.rows("faq_block") {
            r.write("\t\t<dl class=\"faq\">\n\t\t\t<dt><strong>");
            r.field(group, "BLOCK_TITLE");
            r.write("</strong></dt>\n");
            for (row, question) in Rows::nested(group, "faq_row") {
                r.write("\t\t\t<dd><a href=\"#f");
                r.write(&block.index.to_string());
                r.write("r");
                r.write(&row.index.to_string());
                r.write("\">");
                r.field(question, "FAQ_QUESTION");
                r.write("</a></dd>\n");
            }
            r.write("\t\t</dl>\n");
        }
        r.write("\t</div>\n</div>\n\n");

        for (block, group) in r.rows("faq_block") {
            r.write("<div class=\"panel ");
            r.write(block.bg_class());
            r.write("\">\n\t<div class=\"inner\">\n\t<h2>");
            r.field(group, "BLOCK_TITLE");
            r.write("</h2>\n");
            for (row, question) in Rows::nested(group, "faq_row") {
                r.write("\t<dl class=\"faq\">\n\t\t<dt id=\"f");
                r.write(&block.index.to_string());
                r.write("r");
                r.write(&row.index.to_string());
                r.write("\"><strong>");
                r.field(question, "FAQ_QUESTION");
                r.write("</strong></dt>\n\t\t<dd>");
                r.field(question, "FAQ_ANSWER");
                r.write("</dd>\n\t\t<dd><a href=\"#faqlinks\" class=\"top\">");
                r.var("L_BACK_TO_TOP");
                r.write("</a></dd>\n\t</dl>\n");
                if !row.is_last() {
                    r.write("\t<hr class=\"dashed\" />\n");
                }
            }
            r.write("\t</div>\n</div>\n");
        }

        r.include("jumpbox");
        r.include("overall_footer");
    }
}
