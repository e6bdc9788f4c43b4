//! Posting form and its editor panel

use crate::engine::Renderer;
use crate::view::View;

const BBCODE_BUTTONS: &[(&str, &str, &str)] = &[
    ("b", "B", "font-weight:bold"),
    ("i", "i", "font-style:italic"),
    ("u", "u", "text-decoration: underline"),
    ("quote", "Quote", ""),
    ("code", "Code", ""),
    ("list", "List", ""),
    ("img", "Img", ""),
    ("url", "URL", "text-decoration: underline"),
];

/// Editor panel: built-in BBCode buttons plus the board's custom tags
pub struct PostingButtons;

impl View for PostingButtons {
    fn name(&self) -> &'static str {
        "posting_buttons"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.write("<script type=\"text/javascript\">\n// <![CDATA[\n\tvar form_name = 'postform';\n\tvar text_name = 'message';\n\tvar help_line = {\n\t\tb: '");
        r.var("LA_BBCODE_B_HELP");
        r.write("',\n\t\ti: '");
        r.var("LA_BBCODE_I_HELP");
        r.write("',\n\t\tu: '");
        r.var("LA_BBCODE_U_HELP");
        r.write("',\n\t\tq: '");
        r.var("LA_BBCODE_Q_HELP");
        r.write("',\n\t\tc: '");
        r.var("LA_BBCODE_C_HELP");
        r.write("'");
        for (_, tag) in r.rows("custom_tags") {
            r.write(",\n\t\tcb_");
            r.field(tag, "BBCODE_ID");
            r.write(": '");
            r.field(tag, "A_BBCODE_HELPLINE");
            r.write("'");
        }
        r.write("\n\t};\n// ]]>\n</script>\n\n<div id=\"format-buttons\">\n");

        if r.flag("S_BBCODE_ALLOWED") {
            for (index, (tag, label, style)) in BBCODE_BUTTONS.iter().enumerate() {
                r.write("\t<input type=\"button\" class=\"button2\" accesskey=\"");
                r.write(tag);
                r.write("\" name=\"addbbcode");
                r.write(&(index * 2).to_string());
                r.write("\" value=\" ");
                r.write(label);
                r.write(" \"");
                if !style.is_empty() {
                    r.write(" style=\"");
                    r.write(style);
                    r.write("\"");
                }
                r.write(" onclick=\"bbstyle(");
                r.write(&(index * 2).to_string());
                r.write(")\" />\n");
            }

            for (_, tag) in r.rows("custom_tags") {
                r.write("\t<input type=\"button\" class=\"button2\" name=\"addbbcode");
                r.field(tag, "BBCODE_ID");
                r.write("\" value=\"");
                r.field(tag, "BBCODE_TAG");
                r.write("\" onclick=\"bbstyle(");
                r.field(tag, "BBCODE_ID");
                r.write(")\" title=\"");
                r.field(tag, "BBCODE_HELPLINE");
                r.write("\" />\n");
            }
        }

        r.write("</div>\n");
    }
}

/// New topic / reply / edit form
pub struct PostingBody;

impl View for PostingBody {
    fn name(&self) -> &'static str {
        "posting_body"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.include("overall_header");
        r.write("<h2>");
        r.var("L_POST_A");
        r.write("</h2>\n\n<form id=\"postform\" method=\"post\" action=\"");
        r.var("S_POST_ACTION");
        r.write("\"");
        r.var("S_FORM_ENCTYPE");
        r.write(">\n");

        if r.flag("ERROR") {
            r.write("<p class=\"error\">");
            r.var("ERROR");
            r.write("</p>\n");
        }

        r.write("<div class=\"panel\" id=\"postingbox\">\n\t<div class=\"inner\">\n\t<fieldset class=\"fields1\">\n");

        if r.flag("S_SHOW_TOPIC_ICONS") {
            r.write("\t<dl>\n\t\t<dt><label for=\"icon\">");
            r.var("L_ICON");
            r.write(":</label></dt>\n\t\t<dd>\n\t\t\t<label for=\"icon\"><input type=\"radio\" name=\"icon\" id=\"icon\" value=\"0\" checked=\"checked\" /> ");
            r.var("L_NO_TOPIC_ICON");
            r.write("</label>\n");
            for (_, icon) in r.rows("topic_icon") {
                r.write("\t\t\t<label for=\"icon-");
                r.field(icon, "ICON_ID");
                r.write("\"><input type=\"radio\" name=\"icon\" id=\"icon-");
                r.field(icon, "ICON_ID");
                r.write("\" value=\"");
                r.field(icon, "ICON_ID");
                r.write("\"");
                if icon.flag("S_ICON_CHECKED") {
                    r.write(" checked=\"checked\"");
                }
                r.write(" /><img src=\"");
                r.field(icon, "ICON_IMG");
                r.write("\" alt=\"\" /></label>\n");
            }
            r.write("\t\t</dd>\n\t</dl>\n");
        }

        r.write("\t<dl style=\"clear: left;\">\n\t\t<dt><label for=\"subject\">");
        r.var("L_SUBJECT");
        r.write(":</label></dt>\n\t\t<dd><input type=\"text\" name=\"subject\" id=\"subject\" size=\"45\" maxlength=\"120\" value=\"");
        r.var("SUBJECT");
        r.write("\" class=\"inputbox autowidth\" /></dd>\n\t</dl>\n");

        r.include("posting_buttons");

        r.write("\t<div id=\"message-box\">\n\t\t<textarea name=\"message\" id=\"message\" rows=\"15\" cols=\"76\" class=\"inputbox\">");
        r.var("MESSAGE");
        r.write("</textarea>\n\t</div>\n\t</fieldset>\n\t</div>\n</div>\n\n");

        r.write("<div class=\"panel bg2\">\n\t<div class=\"inner\">\n\t<fieldset class=\"submit-buttons\">\n\t\t");
        r.var("S_HIDDEN_FIELDS");
        r.write("\n\t\t<input type=\"submit\" tabindex=\"5\" name=\"preview\" value=\"");
        r.var("L_PREVIEW");
        r.write("\" class=\"button1\" />&nbsp;\n\t\t<input type=\"submit\" accesskey=\"s\" tabindex=\"6\" name=\"post\" value=\"");
        r.var("L_SUBMIT");
        r.write("\" class=\"button1\" />\n\t</fieldset>\n\t</div>\n</div>\n\n");

        if r.flag("S_BBCODE_ALLOWED") || r.flag("S_SMILIES_ALLOWED") {
            r.write("<div class=\"panel bg3\" id=\"options-panel\">\n\t<div class=\"inner\">\n\t<fieldset class=\"fields1\">\n");
            if r.flag("S_BBCODE_ALLOWED") {
                r.write("\t\t<div><label for=\"disable_bbcode\"><input type=\"checkbox\" name=\"disable_bbcode\" id=\"disable_bbcode\"");
                r.var("S_BBCODE_CHECKED");
                r.write(" /> ");
                r.var("L_DISABLE_BBCODE");
                r.write("</label></div>\n");
            }
            if r.flag("S_SMILIES_ALLOWED") {
                r.write("\t\t<div><label for=\"disable_smilies\"><input type=\"checkbox\" name=\"disable_smilies\" id=\"disable_smilies\"");
                r.var("S_SMILIES_CHECKED");
                r.write(" /> ");
                r.var("L_DISABLE_SMILIES");
                r.write("</label></div>\n");
            }
            r.write("\t</fieldset>\n\t</div>\n</div>\n");
        }

        r.write("</form>\n");
        r.include("jumpbox");
        r.include("overall_footer");
    }
}
