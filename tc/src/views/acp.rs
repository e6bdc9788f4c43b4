//! Administration control panel pages

use crate::engine::Renderer;
use crate::rows::RowCursor;
use crate::view::View;

pub struct AcpHeader;

impl View for AcpHeader {
    fn name(&self) -> &'static str {
        "acp_header"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.write("<!DOCTYPE html>\n<html dir=\"");
        r.var("S_CONTENT_DIRECTION");
        r.write("\" lang=\"");
        r.var("S_USER_LANG");
        r.write("\">\n<head>\n<meta charset=\"utf-8\" />\n<title>");
        r.var("PAGE_TITLE");
        r.write("</title>\n<link href=\"style/admin.css\" rel=\"stylesheet\" type=\"text/css\" media=\"screen\" />\n</head>\n<body class=\"");
        r.var("S_CONTENT_DIRECTION");
        r.write("\">\n<div id=\"wrap\">\n\t<div id=\"page-header\">\n\t\t<h1>");
        r.var("L_ADMIN_PANEL");
        r.write("</h1>\n\t\t<p><a href=\"");
        r.var("U_ADM_INDEX");
        r.write("\">");
        r.var("L_ADMIN_INDEX");
        r.write("</a> &bull; <a href=\"");
        r.var("U_INDEX");
        r.write("\">");
        r.var("L_FORUM_INDEX");
        r.write("</a></p>\n\t</div>\n\t<div id=\"page-body\">\n\t<div id=\"tabs\">\n\t\t<ul>\n");
        for (_, tab) in r.rows("t_block1") {
            r.write("\t\t\t<li");
            if tab.flag("S_SELECTED") {
                r.write(" id=\"activetab\"");
            }
            r.write("><a href=\"");
            r.field(tab, "U_TITLE");
            r.write("\"><span>");
            r.field(tab, "L_TITLE");
            r.write("</span></a></li>\n");
        }
        r.write("\t\t</ul>\n\t</div>\n\t<div id=\"acp\">\n\t<div class=\"panel\">\n\t\t<div id=\"content\">\n\t\t\t<div id=\"main\">\n");
    }
}

pub struct AcpFooter;

impl View for AcpFooter {
    fn name(&self) -> &'static str {
        "acp_footer"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.write("\t\t\t</div>\n\t\t</div>\n\t</div>\n\t</div>\n\t</div>\n\t<div id=\"page-footer\">\n\t\t");
        r.var("L_POWERED_BY");
        if r.flag("DEBUG_OUTPUT") {
            r.write("<br />");
            r.var("DEBUG_OUTPUT");
        }
        r.write("\n\t</div>\n</div>\n</body>\n</html>\n");
    }
}

/// Admin index: board statistics and inactive users
pub struct AcpMain;

impl View for AcpMain {
    fn name(&self) -> &'static str {
        "acp_main"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.include("acp_header");
        r.write("<h1>");
        r.var("L_WELCOME_PHPBB");
        r.write("</h1>\n<p>");
        r.var("L_ADMIN_INTRO");
        r.write("</p>\n\n");

        if r.flag("S_REMOVE_INSTALL") {
            r.write("<div class=\"errorbox\">\n\t<h3>");
            r.var("L_WARNING");
            r.write("</h3>\n\t<p>");
            r.var("L_REMOVE_INSTALL");
            r.write("</p>\n</div>\n\n");
        }

        r.write("<table cellspacing=\"1\">\n\t<caption>");
        r.var("L_FORUM_STATS");
        r.write("</caption>\n\t<thead>\n\t<tr>\n\t\t<th>");
        r.var("L_STATISTIC");
        r.write("</th>\n\t\t<th>");
        r.var("L_VALUE");
        r.write("</th>\n\t</tr>\n\t</thead>\n\t<tbody>\n");
        const STATS: &[(&str, &str)] = &[
            ("L_NUMBER_POSTS", "TOTAL_POSTS"),
            ("L_POSTS_PER_DAY", "POSTS_PER_DAY"),
            ("L_NUMBER_TOPICS", "TOTAL_TOPICS"),
            ("L_TOPICS_PER_DAY", "TOPICS_PER_DAY"),
            ("L_NUMBER_USERS", "TOTAL_USERS"),
            ("L_USERS_PER_DAY", "USERS_PER_DAY"),
            ("L_BOARD_STARTED", "START_DATE"),
            ("L_DATABASE_SIZE", "DBSIZE"),
        ];
        for (index, (label, value)) in STATS.iter().enumerate() {
            r.write("\t<tr class=\"");
            let cursor = RowCursor {
                index,
                count: STATS.len(),
            };
            r.write(cursor.row_class());
            r.write("\">\n\t\t<td>");
            r.var(label);
            r.write(": </td>\n\t\t<td><strong>");
            r.var(value);
            r.write("</strong></td>\n\t</tr>\n");
        }
        r.write("\t</tbody>\n</table>\n\n");

        if r.flag("S_INACTIVE_USERS") {
            r.write("<h2>");
            r.var("L_INACTIVE_USERS");
            r.write("</h2>\n<p>");
            r.var("L_INACTIVE_USERS_EXPLAIN");
            r.write("</p>\n<table cellspacing=\"1\">\n\t<thead>\n\t<tr>\n\t\t<th>");
            r.var("L_USERNAME");
            r.write("</th>\n\t\t<th>");
            r.var("L_JOINED");
            r.write("</th>\n\t\t<th>");
            r.var("L_INACTIVE_REASON");
            r.write("</th>\n\t</tr>\n\t</thead>\n\t<tbody>\n");
            let inactive = r.rows("inactive");
            if inactive.is_empty() {
                r.write("\t<tr>\n\t\t<td colspan=\"3\" style=\"text-align: center;\">");
                r.var("L_NO_INACTIVE_USERS");
                r.write("</td>\n\t</tr>\n");
            }
            for (cursor, user) in inactive {
                r.write("\t<tr class=\"");
                r.write(cursor.row_class());
                r.write("\">\n\t\t<td><a href=\"");
                r.field(user, "U_USER_ADMIN");
                r.write("\">");
                r.field(user, "USERNAME");
                r.write("</a></td>\n\t\t<td>");
                r.field(user, "JOINED");
                r.write("</td>\n\t\t<td>");
                r.field(user, "REASON");
                r.write("</td>\n\t</tr>\n");
            }
            r.write("\t</tbody>\n</table>\n");
        }

        r.include("acp_footer");
    }
}

/// Forum management list with ordering and edit/delete actions
pub struct AcpForums;

impl View for AcpForums {
    fn name(&self) -> &'static str {
        "acp_forums"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.include("acp_header");
        r.write("<a id=\"maincontent\"></a>\n<h1>");
        r.var("L_FORUM_ADMIN");
        r.write("</h1>\n<p>");
        r.var("L_FORUM_ADMIN_EXPLAIN");
        r.write("</p>\n\n");

        if r.flag("ERROR_MSG") {
            r.write("<div class=\"errorbox\">\n\t<h3>");
            r.var("L_WARNING");
            r.write("</h3>\n\t<p>");
            r.var("ERROR_MSG");
            r.write("</p>\n</div>\n\n");
        }

        r.write("<p><strong>");
        r.var("NAVIGATION");
        r.write("</strong></p>\n\n");

        let forums = r.rows("forums");
        if forums.is_empty() {
            r.write("<p>");
            r.var("L_NO_FORUMS");
            r.write("</p>\n");
        } else {
            r.write("<table cellspacing=\"1\">\n\t<col class=\"row1\" /><col class=\"row1\" /><col class=\"row2\" />\n\t<tbody>\n");
            for (cursor, forum) in forums {
                r.write("\t<tr class=\"");
                r.write(cursor.row_class());
                r.write("\">\n\t\t<td style=\"width: 5%; text-align: center;\">");
                r.field(forum, "FOLDER_IMAGE");
                r.write("</td>\n\t\t<td>\n\t\t\t<strong>");
                if forum.flag("S_FORUM_LINK") {
                    r.field(forum, "FORUM_NAME");
                } else {
                    r.write("<a href=\"");
                    r.field(forum, "U_FORUM");
                    r.write("\">");
                    r.field(forum, "FORUM_NAME");
                    r.write("</a>");
                }
                r.write("</strong>");
                if forum.flag("FORUM_DESCRIPTION") {
                    r.write("<br /><span>");
                    r.field(forum, "FORUM_DESCRIPTION");
                    r.write("</span>");
                }
                if forum.flag("S_FORUM_POST") {
                    r.write("<br /><br /><span>");
                    r.var("L_TOPICS");
                    r.write(": <strong>");
                    r.field(forum, "FORUM_TOPICS");
                    r.write("</strong> / ");
                    r.var("L_POSTS");
                    r.write(": <strong>");
                    r.field(forum, "FORUM_POSTS");
                    r.write("</strong></span>");
                }
                r.write("\n\t\t</td>\n\t\t<td style=\"vertical-align: top; width: 100px; text-align: right; white-space: nowrap;\">\n\t\t\t");
                if cursor.is_first() {
                    r.var("ICON_MOVE_UP_DISABLED");
                } else {
                    r.write("<a href=\"");
                    r.field(forum, "U_MOVE_UP");
                    r.write("\">");
                    r.var("ICON_MOVE_UP");
                    r.write("</a>");
                }
                r.write("\n\t\t\t");
                if cursor.is_last() {
                    r.var("ICON_MOVE_DOWN_DISABLED");
                } else {
                    r.write("<a href=\"");
                    r.field(forum, "U_MOVE_DOWN");
                    r.write("\">");
                    r.var("ICON_MOVE_DOWN");
                    r.write("</a>");
                }
                r.write("\n\t\t\t<a href=\"");
                r.field(forum, "U_EDIT");
                r.write("\">");
                r.var("ICON_EDIT");
                r.write("</a>\n\t\t\t<a href=\"");
                r.field(forum, "U_DELETE");
                r.write("\">");
                r.var("ICON_DELETE");
                r.write("</a>\n\t\t</td>\n\t</tr>\n");
            }
            r.write("\t</tbody>\n</table>\n");
        }

        r.write("\n<form id=\"fselect\" method=\"post\" action=\"");
        r.var("U_SEL_ACTION");
        r.write("\">\n<fieldset class=\"quick\">\n\t");
        r.var("L_SELECT_FORUM");
        r.write(": <select name=\"parent_id\" onchange=\"if(this.options[this.selectedIndex].value != -1){ this.form.submit(); }\">");
        r.var("FORUM_BOX");
        r.write("</select>\n\t<input class=\"button2\" type=\"submit\" value=\"");
        r.var("L_GO");
        r.write("\" />\n</fieldset>\n</form>\n");

        r.include("acp_footer");
    }
}
